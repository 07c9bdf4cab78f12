use clap::{Parser, Subcommand};
use serde::Serialize;
use sp_if97::{
    properties_from_hs, properties_from_tp_in, saturation_pressure, saturation_temperature,
    Properties, Region,
};

#[derive(Parser)]
#[command(name = "sp-cli")]
#[command(about = "steamcalc CLI - IF-97 water/steam properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Properties from temperature and pressure
    Tp {
        /// Temperature in °C
        temperature_c: f64,
        /// Pressure in Pa
        pressure_pa: f64,
        /// Force a region (1, 2, 3, 4 or 5) instead of classifying
        #[arg(long)]
        region: Option<u8>,
        /// Emit JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Properties from specific enthalpy and entropy
    Hs {
        /// Specific enthalpy in kJ/kg
        enthalpy: f64,
        /// Specific entropy in kJ/(kg·K)
        entropy: f64,
        /// Emit JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Saturation pressure from temperature
    SatP {
        /// Temperature in K
        temperature_k: f64,
    },
    /// Saturation temperature from pressure
    SatT {
        /// Pressure in Pa
        pressure_pa: f64,
    },
}

#[derive(Serialize)]
struct StateOutput {
    region: String,
    temperature_k: f64,
    pressure_pa: f64,
    specific_volume_m3_kg: f64,
    density_kg_m3: f64,
    internal_energy_kj_kg: f64,
    entropy_kj_kg_k: f64,
    enthalpy_kj_kg: f64,
    cv_kj_kg_k: f64,
    cp_kj_kg_k: f64,
    speed_of_sound_m_s: f64,
    dynamic_viscosity_pa_s: Option<f64>,
    thermal_conductivity_w_m_k: Option<f64>,
}

impl StateOutput {
    fn new(props: &Properties, region: Region, t_k: f64, p_pa: f64) -> Self {
        Self {
            region: region.to_string(),
            temperature_k: t_k,
            pressure_pa: p_pa,
            specific_volume_m3_kg: props.specific_volume,
            density_kg_m3: props.density,
            internal_energy_kj_kg: props.internal_energy,
            entropy_kj_kg_k: props.entropy,
            enthalpy_kj_kg: props.enthalpy,
            cv_kj_kg_k: props.cv,
            cp_kj_kg_k: props.cp,
            speed_of_sound_m_s: props.speed_of_sound,
            dynamic_viscosity_pa_s: sp_transport::dynamic_viscosity(t_k, props.density).ok(),
            thermal_conductivity_w_m_k: sp_transport::thermal_conductivity(t_k, props.density)
                .ok(),
        }
    }

    fn print_table(&self) {
        println!("region              : {}", self.region);
        println!("temperature         : {:.4} K", self.temperature_k);
        println!("pressure            : {:.2} Pa", self.pressure_pa);
        println!("specific volume     : {:.8e} m³/kg", self.specific_volume_m3_kg);
        println!("density             : {:.4} kg/m³", self.density_kg_m3);
        println!("internal energy     : {:.4} kJ/kg", self.internal_energy_kj_kg);
        println!("entropy             : {:.6} kJ/(kg·K)", self.entropy_kj_kg_k);
        println!("enthalpy            : {:.4} kJ/kg", self.enthalpy_kj_kg);
        println!("cv                  : {:.6} kJ/(kg·K)", self.cv_kj_kg_k);
        println!("cp                  : {:.6} kJ/(kg·K)", self.cp_kj_kg_k);
        println!("speed of sound      : {:.4} m/s", self.speed_of_sound_m_s);
        if let Some(mu) = self.dynamic_viscosity_pa_s {
            println!("dynamic viscosity   : {mu:.4e} Pa·s");
        }
        if let Some(lambda) = self.thermal_conductivity_w_m_k {
            println!("thermal conductivity: {lambda:.4} W/(m·K)");
        }
    }

    fn emit(&self, json: bool) -> Result<(), Box<dyn std::error::Error>> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            self.print_table();
        }
        Ok(())
    }
}

fn parse_region(tag: u8) -> Result<Region, String> {
    match tag {
        1 => Ok(Region::R1),
        2 => Ok(Region::R2),
        3 => Ok(Region::R3),
        4 => Ok(Region::R4),
        5 => Ok(Region::R5),
        other => Err(format!("unknown region {other}; expected 1..=5")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tp {
            temperature_c,
            pressure_pa,
            region,
            json,
        } => {
            let forced = region.map(parse_region).transpose()?;
            let (props, region) = properties_from_tp_in(temperature_c, pressure_pa, forced)?;
            StateOutput::new(&props, region, temperature_c + 273.15, pressure_pa).emit(json)?;
        }
        Commands::Hs {
            enthalpy,
            entropy,
            json,
        } => {
            let state = properties_from_hs(enthalpy, entropy)?;
            StateOutput::new(
                &state.properties,
                state.region,
                state.temperature_k,
                state.pressure_pa,
            )
            .emit(json)?;
        }
        Commands::SatP { temperature_k } => {
            let p = saturation_pressure(temperature_k)?;
            println!("psat({temperature_k} K) = {p:.4} Pa");
        }
        Commands::SatT { pressure_pa } => {
            let t = saturation_temperature(pressure_pa)?;
            println!("Tsat({pressure_pa} Pa) = {t:.6} K");
        }
    }
    Ok(())
}
