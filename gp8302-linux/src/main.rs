use clap::Parser;
use rppal::{
    gpio::{Gpio, IoPin, Mode},
    hal::Delay,
};
use std::convert::Infallible;
use twowire_bitbang::{BidirPin, BitbangTwoWire};

/// Drive a GP8302 4-20 mA current-loop DAC over two GPIO lines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// BCM GPIO number of the clock line
    #[arg(long, default_value_t = 19)]
    scl: u8,
    /// BCM GPIO number of the data line
    #[arg(long, default_value_t = 18)]
    sda: u8,
    /// 7-bit device address
    #[arg(long, default_value_t = gp8302::GP8302_DEFAULT_ADDRESS)]
    address: u8,
    /// Loop current to output, in mA
    #[arg(short, long)]
    current: f32,
    /// Persist the written code to the chip's non-volatile memory
    #[arg(long)]
    store: bool,
}

/// The data line: an `IoPin` flipped between output and input so the
/// acknowledge slot can be sampled.
struct FlexSda(IoPin);

impl BidirPin for FlexSda {
    type Error = Infallible;

    fn set_output_mode(&mut self) -> Result<(), Infallible> {
        self.0.set_mode(Mode::Output);
        Ok(())
    }

    fn set_input_mode(&mut self) -> Result<(), Infallible> {
        self.0.set_mode(Mode::Input);
        Ok(())
    }

    fn write(&mut self, high: bool) -> Result<(), Infallible> {
        if high {
            self.0.set_high();
        } else {
            self.0.set_low();
        }
        Ok(())
    }

    fn read(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_high())
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();
    // Parse command line arguments
    let args = Args::parse();
    // Claim the two GPIO lines, idle high
    let gpio = Gpio::new().expect("Failed to open the GPIO controller");
    let mut scl = gpio
        .get(args.scl)
        .expect("Failed to claim the clock line")
        .into_output();
    scl.set_high();
    let mut sda = gpio
        .get(args.sda)
        .expect("Failed to claim the data line")
        .into_io(Mode::Output);
    sda.set_high();
    // Create a driver over a bit-banged two-wire master
    let bus = BitbangTwoWire::new(scl, FlexSda(sda), Delay::new());
    let mut dac = gp8302::Gp8302::new(bus).with_address(args.address);
    match dac.probe().expect("Probe failed") {
        gp8302::ProbeStatus::Found => log::info!("GP8302 found at 0x{:02x}", args.address),
        gp8302::ProbeStatus::NotFound => {
            log::warn!("No device acknowledged 0x{:02x}, continuing anyway", args.address)
        }
    }
    // Output the requested current
    let code = dac
        .write_output_current(args.current)
        .expect("Failed to write the output current");
    log::info!("Requested {} mA, wrote code {}", args.current, code);
    if args.store {
        // Persist the latched code through power cycles
        let mut delay = Delay::new();
        dac.store(&mut delay).expect("Failed to store the output code");
        log::info!("Output code stored to non-volatile memory");
    }
}
