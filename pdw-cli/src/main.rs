mod output;

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use pdw_core::{EncoderConfig, PdwRecord, PulseDescriptor};
use pdw_types::{PdwResult, PhasePolicy};

use crate::output::{render, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "pdw",
    version = env!("CARGO_PKG_VERSION"),
    about = "Encode one Pulse Descriptor Word into 28 bytes",
    long_about = None,
)]
struct Cli {
    /// JSON файл с параметрами импульса (флаги ниже переопределяют его поля)
    #[arg(long)]
    descriptor: Option<PathBuf>,
    /// JSON файл с настройками кодировщика
    #[arg(long)]
    config: Option<PathBuf>,
    /// Фаза на границе 360°: overflow, wrap
    #[arg(long)]
    phase_policy: Option<String>,
    /// Формат вывода: hex, bin, json
    #[arg(short = 'o', long, default_value = "hex")]
    output_format: String,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    marked_operation: Option<u8>,
    /// Частота, Гц
    #[arg(short = 'f', long)]
    frequency: Option<f64>,
    /// Фаза, градусы
    #[arg(long, allow_negative_numbers = true)]
    phase: Option<f64>,
    #[arg(long)]
    pulse_start_time: Option<u64>,
    #[arg(long)]
    pulse_width: Option<u32>,
    /// Относительная мощность, дБ
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    relative_power: Option<f64>,
    /// Маркеры: ALL, NONE или набор меток 1-9, A-C
    #[arg(short, long)]
    markers: Option<String>,
    #[arg(long)]
    pulse_mode: Option<u8>,
    #[arg(long)]
    phase_control: Option<u8>,
    #[arg(long)]
    band_adjust: Option<u8>,
    #[arg(long)]
    chirp_control: Option<u8>,
    #[arg(long)]
    freq_phase_coding: Option<u16>,
    #[arg(long)]
    chirp_rate: Option<u32>,
    #[arg(long)]
    freq_band_map: Option<u8>,
    #[arg(long)]
    pdw_format: Option<u8>,
}

impl Cli {
    fn descriptor(&self) -> PdwResult<PulseDescriptor> {
        let mut desc = match &self.descriptor {
            Some(path) => PulseDescriptor::load(path)?,
            None => PulseDescriptor::default(),
        };

        if let Some(v) = self.marked_operation {
            desc.marked_operation = v;
        }
        if let Some(v) = self.frequency {
            desc.frequency_hz = v;
        }
        if let Some(v) = self.phase {
            desc.phase_deg = v;
        }
        if let Some(v) = self.pulse_start_time {
            desc.pulse_start_time = v;
        }
        if let Some(v) = self.pulse_width {
            desc.pulse_width = v;
        }
        if let Some(v) = self.relative_power {
            desc.relative_power_db = v;
        }
        if let Some(v) = &self.markers {
            desc.markers = v.clone();
        }
        if let Some(v) = self.pulse_mode {
            desc.pulse_mode = v;
        }
        if let Some(v) = self.phase_control {
            desc.phase_control = v;
        }
        if let Some(v) = self.band_adjust {
            desc.band_adjust = v;
        }
        if let Some(v) = self.chirp_control {
            desc.chirp_control = v;
        }
        if let Some(v) = self.freq_phase_coding {
            desc.freq_phase_coding = v;
        }
        if let Some(v) = self.chirp_rate {
            desc.chirp_rate = v;
        }
        if let Some(v) = self.freq_band_map {
            desc.freq_band_map = v;
        }
        if let Some(v) = self.pdw_format {
            desc.pdw_format = v;
        }

        Ok(desc)
    }

    fn encoder_config(&self) -> PdwResult<EncoderConfig> {
        let mut config = match &self.config {
            Some(path) => EncoderConfig::load(path)?,
            None => EncoderConfig::default(),
        };

        if let Some(policy) = &self.phase_policy {
            config.phase_policy = policy.parse::<PhasePolicy>()?;
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> PdwResult<String> {
    let format: OutputFormat = cli.output_format.parse()?;
    let config = cli.encoder_config()?;
    let desc = cli.descriptor()?;

    info!(
        "Encoding pulse: {:.3} MHz, {}°, {} dB, markers {:?}, phase policy {}",
        desc.frequency_hz / 1e6,
        desc.phase_deg,
        desc.relative_power_db,
        desc.markers,
        config.phase_policy
    );

    let record = PdwRecord::with_config(&desc, &config)?;
    let word = record.encode()?;

    render(&record, &word, format)
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    match run(&cli) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            error!("Encoding failed: {e}");
            std::process::exit(1);
        }
    }
}
