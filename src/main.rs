use dotgrid::{channel, run_dotgrid, DotGridConfig};

fn main() -> eframe::Result<()> {
    // The sink is unused in standalone mode; dots come from the pointer.
    let (_sink, rx) = channel();
    run_dotgrid(rx, DotGridConfig::default())
}
