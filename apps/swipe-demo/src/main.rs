//! Replays a scripted set of swipes over a list of reveal rows and prints
//! where each row comes to rest.

mod rows;
mod script;

use anyhow::{bail, Context, Result};
use swipe_reveal_foundation::ViewConfiguration;
use swipe_reveal_ui::SwipeRevealConfig;

use crate::rows::RowList;

const TITLES: &[&str] = &["Inbox: weekly report", "Build #4821 failed", "Lunch on Friday?"];

struct Options {
    density: f32,
    fling_settle: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        density: 1.0,
        fling_settle: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--density" => {
                let value = args.next().context("--density needs a value")?;
                options.density = value
                    .parse()
                    .with_context(|| format!("invalid density {value:?}"))?;
            }
            "--fling" => options.fling_settle = true,
            other => bail!("unknown argument {other:?} (expected --density <f32> or --fling)"),
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = parse_args()?;
    let config = SwipeRevealConfig::default()
        .with_view_configuration(ViewConfiguration::with_density(options.density))
        .with_fling_settle(options.fling_settle);
    let mut list = RowList::new(TITLES, config).context("building row list")?;

    println!("=== Swipe Reveal Demo ===");
    println!("density {}, fling settle {}", options.density, options.fling_settle);
    println!();

    for gesture in script::default_script() {
        let frames = script::replay(&mut list, gesture)?;
        log::info!("{} settled after {frames} frames", gesture.describe());
        println!("{}", gesture.describe());
        for (index, row) in list.rows().iter().enumerate() {
            let action = row
                .visible_action()
                .map(|bounds| format!("action x={:.0}", bounds.x))
                .unwrap_or_default();
            let scrolling = if row.list_may_intercept() {
                " (list scrolling)"
            } else {
                ""
            };
            println!(
                "  [{index}] {:<24} {:<6} offset={:>3} {action}{scrolling}",
                row.title,
                row.state(),
                row.offset(),
            );
        }
    }
    println!();
    println!("finished at {}ms", list.now_millis());
    Ok(())
}
