use trackclean::{invoke, Clip, FilterForeground, FilterTrackEnds, Operator, Scene};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn scene_of(clip: &Clip) -> Scene {
    let frames = clip.tracks.iter().flat_map(|t| t.markers.keys().copied());
    let (start, end) = frames.fold((i32::MAX, i32::MIN), |(lo, hi), f| (lo.min(f), hi.max(f)));

    if start > end {
        Scene::new(0, 0)
    } else {
        Scene::new(start, end + 1)
    }
}

fn parse_or<T: std::str::FromStr>(arg: Option<String>, default: T) -> T {
    arg.and_then(|a| a.parse().ok()).unwrap_or(default)
}

fn main() -> Result<(), trackclean::Error> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");

    let mut args = std::env::args();

    let _ = args.next().unwrap();
    let in_file_name = args.next().expect("expected clip file name");
    let mode = args.next().unwrap_or_else(|| "ends".to_string());

    let mut clip = Clip::from_reader(std::io::BufReader::new(std::fs::File::open(&in_file_name)?))?;
    let scene = scene_of(&clip);

    match mode.as_str() {
        "ends" => {
            let defaults = FilterTrackEnds::default();
            let op = FilterTrackEnds {
                evaluation_time: parse_or(args.next(), defaults.evaluation_time),
                threshold: parse_or(args.next(), defaults.threshold),
            };
            let report = invoke(&op, scene, Some(&mut clip))?;
            println!("{}: {}", op.label(), report.message());
            for d in &report.muted {
                println!("  {} frame {}", clip.tracks[d.track.0].name, d.frame);
            }
        }
        "foreground" => {
            let defaults = FilterForeground::default();
            let op = FilterForeground {
                evaluation_time: parse_or(args.next(), defaults.evaluation_time),
                threshold: parse_or(args.next(), defaults.threshold),
            };
            let report = invoke(&op, scene, Some(&mut clip))?;
            println!("{}: {}", op.label(), report.message());
            for d in &report.selected {
                println!("  {}", clip.tracks[d.track.0].name);
            }
        }
        other => {
            eprintln!("unknown mode `{}`, expected `ends` or `foreground`", other);
            return Ok(());
        }
    }

    let out_file_name = format!("{}.filtered.json", in_file_name.trim_end_matches(".json"));
    std::fs::write(&out_file_name, clip.to_json()?)?;
    println!("wrote {}", out_file_name);

    Ok(())
}
