use clap::Parser;
use plume_risk_core::{
    compass_point_name, CalibrationProfile, GeoPoint, PlumeQuery, RiskScorer, SkyCondition,
    StabilityClass, WindState,
};
use tracing_subscriber::EnvFilter;

/// Plume risk assessment demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "plume-demo")]
#[command(about = "Atmospheric dispersion risk assessment demo", long_about = None)]
struct Args {
    /// Hazard source latitude in decimal degrees
    #[arg(long, default_value_t = 52.3676)]
    source_lat: f64,

    /// Hazard source longitude in decimal degrees
    #[arg(long, default_value_t = 4.9041)]
    source_lon: f64,

    /// Receptor (home) latitude in decimal degrees
    #[arg(long, default_value_t = 52.0907)]
    receptor_lat: f64,

    /// Receptor (home) longitude in decimal degrees
    #[arg(long, default_value_t = 5.1214)]
    receptor_lon: f64,

    /// Wind speed in m/s
    #[arg(short = 'w', long, default_value_t = 5.0)]
    wind_speed: f64,

    /// Wind direction in degrees (blowing from; 0=N, 90=E)
    #[arg(short = 'd', long, default_value_t = 270.0)]
    wind_direction: f64,

    /// Ambient temperature in °C
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Free-text sky description (e.g. "sunny", "overcast")
    #[arg(long)]
    sky: Option<String>,

    /// Explicit stability class letter (A-F), bypasses the classifier
    #[arg(long)]
    stability: Option<String>,

    /// Use the legacy calibration profile
    #[arg(long)]
    legacy: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let source = GeoPoint::new(args.source_lat, args.source_lon).unwrap_or_else(|e| {
        eprintln!("invalid source: {e}");
        std::process::exit(1);
    });
    let receptor = GeoPoint::new(args.receptor_lat, args.receptor_lon).unwrap_or_else(|e| {
        eprintln!("invalid receptor: {e}");
        std::process::exit(1);
    });

    let mut wind = WindState::new(args.wind_speed, args.wind_direction).unwrap_or_else(|e| {
        eprintln!("invalid wind: {e}");
        std::process::exit(1);
    });
    if let Some(t) = args.temperature {
        wind = wind.with_temperature(t);
    }
    if let Some(sky) = &args.sky {
        wind = wind.with_sky(SkyCondition::from_description(sky));
    }
    if let Some(letter) = &args.stability {
        // Unparseable letters fall back to neutral D, same as the classifier.
        wind = wind.with_stability(letter.parse::<StabilityClass>().unwrap_or_default());
    }

    let profile = if args.legacy {
        CalibrationProfile::Legacy
    } else {
        CalibrationProfile::Standard
    };
    let scorer = RiskScorer::new(profile);

    match scorer.assess(&PlumeQuery::new(source, receptor, wind)) {
        Ok(a) => {
            println!("status:    {} ({:?})", a.status, a.reason);
            println!("risk:      {:.1}%", a.risk_percentage);
            println!(
                "distance:  {:.1} km, bearing {:.0}° ({})",
                a.distance_km,
                a.bearing_deg,
                compass_point_name(a.bearing_deg)
            );
            println!(
                "plume axis: {:.0}° ({})",
                wind.plume_axis_deg(),
                compass_point_name(wind.plume_axis_deg())
            );
        }
        Err(e) => {
            eprintln!("assessment failed: {e}");
            std::process::exit(1);
        }
    }
}
