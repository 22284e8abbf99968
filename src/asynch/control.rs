use atat::asynch::AtatClient;
use atat::AtatCmd;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::command::fcc::responses::{
    is_macro_channel_bitmask, DownFreqOffsetResponse, MacroChannelBitmaskResponse,
    MacroChannelResponse,
};
use crate::command::fcc::{
    GetDownFreqOffset, GetMacroChannel, GetMacroChannelBitmask, SetDownFreqOffset,
    SetMacroChannel, SetMacroChannelBitmask,
};
use crate::command::general::responses::{FirmwareVersionResponse, RegionResponse};
use crate::command::general::types::Region;
use crate::command::general::{
    Attention, DefaultConfiguration, FactorySettings, FirmwareVersion, GetRegion, SaveSettings,
};
use crate::command::lan::responses::{
    AddressResponse, FrequencyResponse, LanPowerResponse, MaskResponse, PacketResponse,
};
use crate::command::lan::{
    GetAddress, GetFrequency, GetMask, GetPacket, GetPowerLan, Receive, RxMode, SendLan,
    SendLanHex, SetAddress, SetFrequency, SetMask, SetPowerLan, SetRxMode, LAN_MAX_PAYLOAD,
};
use crate::command::sigfox::responses::{IdResponse, PowerResponse};
use crate::command::SigfoxRequest;
use crate::command::sigfox::{
    ContinuousWave, GetId, GetPower, SendFrame, SendFrameAck, SendHexFrame, SendHexFrameAck,
    SendKeepAlive, SetKeepAlivePeriod, SetPower, TestTransmit,
};
use crate::config::{SigfoxConfig, Transport};
use crate::error::Error;
use crate::hex;

use super::client::SigfoxClient;
use super::state::DeviceState;

/// Sigfox module driver.
///
/// Owns the serial client, the board configuration and the cached
/// [`DeviceState`]. Every operation runs one transaction and only touches
/// the state when the module answered `OK` with a well-formed payload.
pub struct Sigfox<T: Transport, C: SigfoxConfig> {
    client: SigfoxClient<T>,
    config: C,
    state: DeviceState,
    open: bool,
}

impl<T: Transport, C: SigfoxConfig> Sigfox<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self {
            client: SigfoxClient::new(transport),
            config,
            state: DeviceState::default(),
            open: false,
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Refuse commands on a closed port or ones too long to encode, before
    /// anything reaches the wire.
    fn ready<Cmd: SigfoxRequest>(&self, cmd: &Cmd) -> Result<(), Error> {
        if !self.open {
            return Err(Error::TransportUnavailable);
        }
        cmd.encode()?;
        Ok(())
    }

    async fn send_cmd<Cmd: AtatCmd + SigfoxRequest>(
        &mut self,
        cmd: &Cmd,
    ) -> Result<Cmd::Response, Error> {
        self.ready(cmd)?;
        self.client.send(cmd).await.map_err(|e| {
            let e = Error::from(e);
            warn!("Command failed: {:?}", e);
            e
        })
    }

    async fn send_cmd_with_timeout<Cmd: AtatCmd + SigfoxRequest>(
        &mut self,
        cmd: &Cmd,
        timeout: Duration,
    ) -> Result<Cmd::Response, Error> {
        self.ready(cmd)?;
        self.client
            .send_with_timeout(cmd, timeout)
            .await
            .map_err(|e| {
                let e = Error::from(e);
                warn!("Command failed: {:?}", e);
                e
            })
    }

    /// Power the module and open the serial port.
    pub async fn on(&mut self) -> Result<(), Error> {
        if let Some(pin) = self.config.power_pin() {
            pin.set_high().map_err(|_| Error::Pin)?;
            Timer::after(C::POWER_ON_DELAY).await;
        }
        self.client.set_baudrate(C::BAUD_RATE);
        self.open = true;
        info!("Sigfox module on, {} baud", C::BAUD_RATE);
        Ok(())
    }

    /// Close the serial port and cut the module's power.
    pub async fn off(&mut self) -> Result<(), Error> {
        self.client.close();
        self.open = false;
        if let Some(pin) = self.config.power_pin() {
            pin.set_low().map_err(|_| Error::Pin)?;
        }
        info!("Sigfox module off");
        Ok(())
    }

    /// Is the module answering?
    pub async fn check(&mut self) -> Result<(), Error> {
        self.send_cmd(&Attention).await?;
        Ok(())
    }

    pub async fn get_id(&mut self) -> Result<u32, Error> {
        let IdResponse { id } = self.send_cmd(&GetId).await?;
        self.state.id = id;
        Ok(id)
    }

    /// Send `data` over the Sigfox network.
    pub async fn send(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Err(Error::InvalidArgument);
        }
        self.send_cmd(&SendFrame { data }).await?;
        Ok(())
    }

    /// Send a frame given as a hex string, two digits per byte.
    pub async fn send_hex(&mut self, hex: &str) -> Result<(), Error> {
        if !hex::is_hex_bytes(hex) {
            return Err(Error::InvalidArgument);
        }
        self.send_cmd(&SendHexFrame { hex }).await?;
        Ok(())
    }

    /// Send `data` and wait for the network to acknowledge it.
    pub async fn send_ack(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Err(Error::InvalidArgument);
        }
        self.send_cmd(&SendFrameAck { data }).await?;
        Ok(())
    }

    pub async fn send_ack_hex(&mut self, hex: &str) -> Result<(), Error> {
        if !hex::is_hex_bytes(hex) {
            return Err(Error::InvalidArgument);
        }
        self.send_cmd(&SendHexFrameAck { hex }).await?;
        Ok(())
    }

    pub async fn test_transmit(&mut self, count: u16, period: u16, channel: i32) -> Result<(), Error> {
        self.send_cmd(&TestTransmit {
            count,
            period,
            channel,
        })
        .await?;
        Ok(())
    }

    pub async fn show_firmware(&mut self) -> Result<&str, Error> {
        let FirmwareVersionResponse { version } = self.send_cmd(&FirmwareVersion).await?;
        info!("Firmware version: {}", version.as_str());
        self.state.firmware = version;
        Ok(self.state.firmware.as_str())
    }

    pub async fn set_power(&mut self, power: u8) -> Result<(), Error> {
        self.send_cmd(&SetPower { power }).await?;
        self.state.power = power;
        Ok(())
    }

    pub async fn get_power(&mut self) -> Result<u8, Error> {
        let PowerResponse { power } = self.send_cmd(&GetPower).await?;
        self.state.power = power;
        Ok(power)
    }

    pub async fn send_keep_alive(&mut self) -> Result<(), Error> {
        self.send_cmd(&SendKeepAlive).await?;
        Ok(())
    }

    /// Let the module send a keep-alive on its own every `period` hours.
    pub async fn set_keep_alive_period(&mut self, period: u8) -> Result<(), Error> {
        self.send_cmd(&SetKeepAlivePeriod { period }).await?;
        Ok(())
    }

    pub async fn continuous_wave(&mut self, frequency: u32, enable: bool) -> Result<(), Error> {
        self.send_cmd(&ContinuousWave { frequency, enable }).await?;
        Ok(())
    }

    pub async fn save_settings(&mut self) -> Result<(), Error> {
        self.send_cmd(&SaveSettings).await?;
        Ok(())
    }

    pub async fn factory_settings(&mut self) -> Result<(), Error> {
        self.send_cmd(&FactorySettings).await?;
        Ok(())
    }

    pub async fn default_configuration(&mut self) -> Result<(), Error> {
        self.send_cmd(&DefaultConfiguration).await?;
        Ok(())
    }

    pub async fn get_region(&mut self) -> Result<Region, Error> {
        let RegionResponse { region } = self.send_cmd(&GetRegion).await?;
        self.state.region = region;
        Ok(region)
    }

    // LAN

    pub async fn set_address_lan(&mut self, address: u32) -> Result<(), Error> {
        self.send_cmd(&SetAddress { address }).await?;
        self.state.address = address;
        Ok(())
    }

    pub async fn get_address_lan(&mut self) -> Result<u32, Error> {
        let AddressResponse { address } = self.send_cmd(&GetAddress).await?;
        self.state.address = address;
        Ok(address)
    }

    pub async fn set_mask(&mut self, mask: u32) -> Result<(), Error> {
        self.send_cmd(&SetMask { mask }).await?;
        self.state.mask = mask;
        Ok(())
    }

    pub async fn get_mask(&mut self) -> Result<u32, Error> {
        let MaskResponse { mask } = self.send_cmd(&GetMask).await?;
        self.state.mask = mask;
        Ok(mask)
    }

    pub async fn set_frequency(&mut self, frequency: u32) -> Result<(), Error> {
        self.send_cmd(&SetFrequency { frequency }).await?;
        self.state.frequency = frequency;
        Ok(())
    }

    pub async fn get_frequency(&mut self) -> Result<u32, Error> {
        let FrequencyResponse { frequency } = self.send_cmd(&GetFrequency).await?;
        self.state.frequency = frequency;
        Ok(frequency)
    }

    pub async fn set_power_lan(&mut self, power: u8) -> Result<(), Error> {
        self.send_cmd(&SetPowerLan { power }).await?;
        self.state.power_lan = power;
        Ok(())
    }

    pub async fn get_power_lan(&mut self) -> Result<u8, Error> {
        let LanPowerResponse { power } = self.send_cmd(&GetPowerLan).await?;
        self.state.power_lan = power;
        Ok(power)
    }

    /// Send `data` to the LAN peers matching our address and mask.
    pub async fn send_lan(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Err(Error::InvalidArgument);
        }
        if data.len() > LAN_MAX_PAYLOAD {
            return Err(Error::PayloadTooLong);
        }
        self.send_cmd(&SendLan { data }).await?;
        Ok(())
    }

    pub async fn send_lan_hex(&mut self, hex: &str) -> Result<(), Error> {
        if !hex::is_hex_bytes(hex) {
            return Err(Error::InvalidArgument);
        }
        if hex.len() / 2 > LAN_MAX_PAYLOAD {
            return Err(Error::PayloadTooLong);
        }
        self.send_cmd(&SendLanHex { hex }).await?;
        Ok(())
    }

    /// Listen up to `wait_secs` seconds for a single LAN packet.
    pub async fn receive(&mut self, wait_secs: u16) -> Result<&[u8], Error> {
        let cmd = Receive { wait_secs };
        let PacketResponse { packet } = self
            .send_cmd_with_timeout(&cmd, Duration::from_millis(cmd.timeout_ms().into()))
            .await?;
        self.state.packet = packet;
        Ok(&self.state.packet)
    }

    /// Decode a hex encoded packet into the packet buffer.
    pub fn parse_packet_lan(&mut self, hex: &str) -> Result<(), Error> {
        self.state.packet = hex::decode(hex).map_err(|e| match e {
            Error::Overflow => Error::PayloadTooLong,
            e => e,
        })?;
        Ok(())
    }

    /// Log the last received packet.
    pub fn show_packet(&self) {
        let mut text: String<{ 2 * LAN_MAX_PAYLOAD }> = String::new();
        if hex::write_hex(&mut text, &self.state.packet).is_ok() {
            info!(
                "LAN packet ({} bytes): {}",
                self.state.packet.len(),
                text.as_str()
            );
        }
    }

    pub async fn disable_rx(&mut self) -> Result<(), Error> {
        self.send_cmd(&SetRxMode {
            mode: RxMode::Disabled,
        })
        .await?;
        Ok(())
    }

    /// Keep receiving in the background, see [`Self::get_multi_packet`].
    pub async fn set_multi_packet(&mut self) -> Result<(), Error> {
        self.send_cmd(&SetRxMode {
            mode: RxMode::MultiPacket,
        })
        .await?;
        Ok(())
    }

    /// Fetch the next packet buffered in multi-packet mode, waiting at most
    /// `time`.
    pub async fn get_multi_packet(&mut self, time: Duration) -> Result<&[u8], Error> {
        let PacketResponse { packet } = self.send_cmd_with_timeout(&GetPacket, time).await?;
        self.state.packet = packet;
        Ok(&self.state.packet)
    }

    // FCC

    pub async fn set_macro_channel_bitmask(&mut self, bitmask: &str) -> Result<(), Error> {
        if !is_macro_channel_bitmask(bitmask) {
            return Err(Error::InvalidArgument);
        }
        self.send_cmd(&SetMacroChannelBitmask { bitmask }).await?;
        self.state.macro_channel_bitmask =
            String::try_from(bitmask).map_err(|_| Error::InvalidArgument)?;
        Ok(())
    }

    pub async fn get_macro_channel_bitmask(&mut self) -> Result<&str, Error> {
        let MacroChannelBitmaskResponse { bitmask } = self.send_cmd(&GetMacroChannelBitmask).await?;
        self.state.macro_channel_bitmask = bitmask;
        Ok(self.state.macro_channel_bitmask.as_str())
    }

    pub async fn set_macro_channel(&mut self, channel: u8) -> Result<(), Error> {
        self.send_cmd(&SetMacroChannel { channel }).await?;
        self.state.macro_channel = channel;
        Ok(())
    }

    pub async fn get_macro_channel(&mut self) -> Result<u8, Error> {
        let MacroChannelResponse { channel } = self.send_cmd(&GetMacroChannel).await?;
        self.state.macro_channel = channel;
        Ok(channel)
    }

    pub async fn set_down_freq_offset(&mut self, offset: i32) -> Result<(), Error> {
        self.send_cmd(&SetDownFreqOffset { offset }).await?;
        self.state.down_freq_offset = offset;
        Ok(())
    }

    pub async fn get_down_freq_offset(&mut self) -> Result<i32, Error> {
        let DownFreqOffsetResponse { offset } = self.send_cmd(&GetDownFreqOffset).await?;
        self.state.down_freq_offset = offset;
        Ok(offset)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::{init_logger, MockBoard, MockTransport};
    use embassy_futures::block_on;

    fn device(mock: &MockTransport) -> (Sigfox<MockTransport, MockBoard>, MockBoard) {
        let board = MockBoard::default();
        let mut sigfox = Sigfox::new(mock.clone(), board.clone());
        block_on(sigfox.on()).unwrap();
        (sigfox, board)
    }

    #[test]
    fn power_cycle() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, board) = device(&mock);
        assert!(board.pin.is_high());
        assert_eq!(mock.baudrate(), Some(9600));
        assert_eq!(block_on(sigfox.check()), Ok(()));

        block_on(sigfox.off()).unwrap();
        assert!(!board.pin.is_high());
        assert!(mock.is_closed());
        assert_eq!(block_on(sigfox.check()), Err(Error::TransportUnavailable));
    }

    #[test]
    fn not_switched_on() {
        let mock = MockTransport::with_registers();
        let mut sigfox = Sigfox::new(mock.clone(), MockBoard::default());

        assert_eq!(block_on(sigfox.get_id()), Err(Error::TransportUnavailable));
        assert!(mock.written().is_empty());
    }

    #[test]
    fn power_round_trip() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        block_on(sigfox.set_power(14)).unwrap();
        assert_eq!(block_on(sigfox.get_power()), Ok(14));
        assert_eq!(sigfox.state().power, 14);
        assert_eq!(mock.written(), ["AT$PW=14\r\n", "AT$PW?\r\n"]);
    }

    #[test]
    fn id_is_cached() {
        init_logger();
        let mock = MockTransport::with_registers();
        mock.set_register("ID", "0001A2B3");
        let (mut sigfox, _) = device(&mock);

        assert_eq!(block_on(sigfox.get_id()), Ok(0x0001_A2B3));
        assert_eq!(sigfox.state().id, 0x0001_A2B3);
    }

    #[test]
    fn failures_leave_state_untouched() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);
        block_on(sigfox.set_power(14)).unwrap();

        mock.reply("ERROR\r\n");
        assert_eq!(block_on(sigfox.set_power(20)), Err(Error::ModuleError));
        mock.reply("OK=abc\r\n");
        assert_eq!(block_on(sigfox.get_power()), Err(Error::MalformedPayload));
        assert_eq!(sigfox.state().power, 14);

        mock.reply("ERROR\r\n");
        assert_eq!(block_on(sigfox.get_id()), Err(Error::ModuleError));
        assert_eq!(sigfox.state().id, 0);
    }

    #[test]
    fn silence_times_out() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        mock.silence();
        assert_eq!(block_on(sigfox.check()), Err(Error::NoResponse));
        // next transaction is answered again
        assert_eq!(block_on(sigfox.check()), Ok(()));
    }

    #[test]
    fn uplink() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        block_on(sigfox.send(&[0x41, 0xB4, 0x00, 0x00, 0x01])).unwrap();
        block_on(sigfox.send_ack(&[0xCA, 0xFE])).unwrap();
        block_on(sigfox.send_hex("cafe")).unwrap();
        block_on(sigfox.send_keep_alive()).unwrap();
        assert_eq!(
            mock.written(),
            [
                "AT$SF=41B4000001\r\n",
                "AT$SF=CAFE,1\r\n",
                "AT$SF=cafe\r\n",
                "AT$SB=1\r\n"
            ]
        );

        assert_eq!(block_on(sigfox.send_hex("CAF")), Err(Error::InvalidArgument));
        assert_eq!(block_on(sigfox.send_ack_hex("XY")), Err(Error::InvalidArgument));
        assert_eq!(block_on(sigfox.send(&[])), Err(Error::InvalidArgument));
        assert_eq!(mock.written().len(), 4);
    }

    #[test]
    fn uplink_longer_than_the_command_line() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        assert_eq!(block_on(sigfox.send(&[0xAA; 48])), Err(Error::Overflow));
        assert!(mock.written().is_empty());
        assert_eq!(block_on(sigfox.send(&[0xAA; 12])), Ok(()));
    }

    #[test]
    fn firmware_and_region() {
        init_logger();
        let mock = MockTransport::with_registers();
        mock.set_register("VER", "SOFT2171");
        mock.set_register("RG", "1");
        let (mut sigfox, _) = device(&mock);

        assert_eq!(block_on(sigfox.show_firmware()), Ok("SOFT2171"));
        assert_eq!(block_on(sigfox.get_region()), Ok(Region::Etsi));
        assert_eq!(sigfox.state().firmware, "SOFT2171");
        assert_eq!(sigfox.state().region, Region::Etsi);
    }

    #[test]
    fn lan_configuration() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        block_on(sigfox.set_address_lan(0x1A2B)).unwrap();
        block_on(sigfox.set_mask(0xFFFF_0000)).unwrap();
        block_on(sigfox.set_frequency(869_312_500)).unwrap();
        block_on(sigfox.set_power_lan(10)).unwrap();

        assert_eq!(block_on(sigfox.get_address_lan()), Ok(0x1A2B));
        assert_eq!(block_on(sigfox.get_mask()), Ok(0xFFFF_0000));
        assert_eq!(block_on(sigfox.get_frequency()), Ok(869_312_500));
        assert_eq!(block_on(sigfox.get_power_lan()), Ok(10));

        let state = sigfox.state();
        assert_eq!(state.address, 0x1A2B);
        assert_eq!(state.mask, 0xFFFF_0000);
        assert_eq!(state.frequency, 869_312_500);
        assert_eq!(state.power_lan, 10);
    }

    #[test]
    fn lan_payload_bound() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        assert_eq!(block_on(sigfox.send_lan(&[0u8; 17])), Ok(()));
        assert_eq!(
            block_on(sigfox.send_lan(&[0u8; 18])),
            Err(Error::PayloadTooLong)
        );
        assert_eq!(
            block_on(sigfox.send_lan_hex("000102030405060708090A0B0C0D0E0F1011")),
            Err(Error::PayloadTooLong)
        );
        assert_eq!(block_on(sigfox.send_lan_hex("0102")), Ok(()));
        assert_eq!(mock.written().len(), 2);
    }

    #[test]
    fn lan_receive() {
        init_logger();
        let mock = MockTransport::new();
        let (mut sigfox, _) = device(&mock);

        mock.reply("OK=0102A0\r\n");
        assert_eq!(block_on(sigfox.receive(5)), Ok(&[0x01, 0x02, 0xA0][..]));
        assert_eq!(mock.written(), ["AT$RL=5\r\n"]);

        // nothing heard in the window
        mock.reply("ERROR\r\n");
        assert_eq!(block_on(sigfox.receive(5)), Err(Error::ModuleError));
        assert_eq!(sigfox.state().packet.as_slice(), &[0x01, 0x02, 0xA0]);
    }

    #[test]
    fn multi_packet() {
        init_logger();
        let mock = MockTransport::new();
        let (mut sigfox, _) = device(&mock);

        mock.reply("OK\r\n");
        block_on(sigfox.set_multi_packet()).unwrap();
        mock.reply("OK=FF\r\n");
        assert_eq!(
            block_on(sigfox.get_multi_packet(Duration::from_millis(100))),
            Ok(&[0xFF][..])
        );
        mock.silence();
        assert_eq!(
            block_on(sigfox.get_multi_packet(Duration::from_millis(20))),
            Err(Error::NoResponse)
        );
        mock.reply("OK\r\n");
        block_on(sigfox.disable_rx()).unwrap();

        assert_eq!(
            mock.written(),
            ["AT$RX=2\r\n", "AT$RX?\r\n", "AT$RX?\r\n", "AT$RX=0\r\n"]
        );
    }

    #[test]
    fn late_packet_is_not_taken_as_next_answer() {
        init_logger();
        let mock = MockTransport::new();
        let (mut sigfox, _) = device(&mock);

        mock.silence();
        assert_eq!(
            block_on(sigfox.get_multi_packet(Duration::from_millis(20))),
            Err(Error::NoResponse)
        );
        // the frame shows up after the wait ran out
        mock.inject("OK=AA\r\n");

        mock.reply("ERROR\r\n");
        assert_eq!(block_on(sigfox.set_power(20)), Err(Error::ModuleError));
        assert_eq!(sigfox.state().power, 0);
        assert!(sigfox.state().packet.is_empty());
        assert_eq!(mock.written(), ["AT$RX?\r\n", "AT$PW=20\r\n"]);
    }

    #[test]
    fn packet_parsing() {
        let mock = MockTransport::new();
        let mut sigfox = Sigfox::new(mock, MockBoard::default());

        assert_eq!(sigfox.parse_packet_lan("48656C6C6F"), Ok(()));
        assert_eq!(sigfox.state().packet.as_slice(), b"Hello");
        sigfox.show_packet();

        assert_eq!(
            sigfox.parse_packet_lan("4G"),
            Err(Error::MalformedPayload)
        );
        assert_eq!(
            sigfox.parse_packet_lan("000102030405060708090A0B0C0D0E0F1011"),
            Err(Error::PayloadTooLong)
        );
        assert_eq!(sigfox.state().packet.as_slice(), b"Hello");
    }

    #[test]
    fn fcc_configuration() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        block_on(sigfox.set_macro_channel_bitmask("000001FF0000000000000000")).unwrap();
        assert_eq!(
            block_on(sigfox.get_macro_channel_bitmask()),
            Ok("000001FF0000000000000000")
        );
        assert_eq!(
            block_on(sigfox.set_macro_channel_bitmask("01FF")),
            Err(Error::InvalidArgument)
        );

        block_on(sigfox.set_macro_channel(1)).unwrap();
        assert_eq!(block_on(sigfox.get_macro_channel()), Ok(1));

        block_on(sigfox.set_down_freq_offset(-1200)).unwrap();
        assert_eq!(block_on(sigfox.get_down_freq_offset()), Ok(-1200));

        let state = sigfox.state();
        assert_eq!(state.macro_channel_bitmask, "000001FF0000000000000000");
        assert_eq!(state.macro_channel, 1);
        assert_eq!(state.down_freq_offset, -1200);
    }

    #[test]
    fn module_settings() {
        init_logger();
        let mock = MockTransport::with_registers();
        let (mut sigfox, _) = device(&mock);

        block_on(sigfox.save_settings()).unwrap();
        block_on(sigfox.factory_settings()).unwrap();
        block_on(sigfox.default_configuration()).unwrap();
        block_on(sigfox.set_keep_alive_period(24)).unwrap();
        block_on(sigfox.test_transmit(10, 5, -1)).unwrap();
        block_on(sigfox.continuous_wave(868_130_000, false)).unwrap();

        assert_eq!(
            mock.written(),
            [
                "AT$SAVE\r\n",
                "AT$FACTORY\r\n",
                "AT$DEFAULT\r\n",
                "AT$KA=24\r\n",
                "AT$ST=10,5,-1\r\n",
                "AT$CW=868130000,0\r\n"
            ]
        );
    }
}
