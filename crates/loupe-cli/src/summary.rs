use std::path::Path;

use console::Style;
use loupe_core::config::WidgetConfig;
use loupe_core::consts::DEFAULT_ZOOM_LEVEL;
use loupe_core::geometry::background_scale_ratio;
use loupe_core::image::ImageSet;
use loupe_core::replay::Snapshot;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    zoomed: Style,
    idle: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            zoomed: Style::new().green(),
            idle: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_geometry_summary(images: &ImageSet, config: &WidgetConfig) {
    let s = Styles::new();
    let base = images.base_size();
    let large = images.large_size();

    rule(&s, "Loupe Geometry");

    println!(
        "  {:<22}{}",
        s.label.apply_to("Base"),
        s.value.apply_to(format!("{}x{}", base.width, base.height))
    );
    println!(
        "  {:<22}{}",
        s.label.apply_to("Large"),
        s.value.apply_to(format!("{}x{}", large.width, large.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Zoom"));
    println!(
        "    {:<20}{}",
        s.label.apply_to("Unzoomed level"),
        s.value.apply_to(format!("{:.4}", images.unzoomed_level()))
    );
    println!(
        "    {:<20}{}",
        s.label.apply_to("Default level"),
        s.value.apply_to(DEFAULT_ZOOM_LEVEL)
    );
    println!(
        "    {:<20}{}",
        s.label.apply_to("Touch scale"),
        s.value.apply_to(format!("{:.4}", images.touch_scale()))
    );
    let zoomed = large.scale(DEFAULT_ZOOM_LEVEL);
    println!(
        "    {:<20}{}",
        s.label.apply_to("Background size"),
        s.value.apply_to(format!("{:.1}x{:.1} px", zoomed.width, zoomed.height))
    );
    println!(
        "    {:<20}{}",
        s.label.apply_to("Transition"),
        s.value.apply_to(format!("{} ms", config.zoom_transition_ms))
    );
    println!();

    println!("  {}", s.header.apply_to("Overview Map"));
    if config.display_map {
        let map = base.scale(config.map_scale_factor);
        let ratio = background_scale_ratio(base.width, large.width, DEFAULT_ZOOM_LEVEL);
        println!(
            "    {:<20}{}",
            s.label.apply_to("Size"),
            s.value.apply_to(format!("{:.1}x{:.1} px", map.width, map.height))
        );
        println!(
            "    {:<20}{}",
            s.label.apply_to("Border"),
            s.value.apply_to(&config.map_border_color)
        );
        println!(
            "    {:<20}{}",
            s.label.apply_to("Highlight"),
            s.value.apply_to(format!("{:.1}%", ratio * 100.0))
        );
    } else {
        println!("    {}", s.idle.apply_to("disabled"));
    }
    println!();
}

pub fn print_replay(script: &Path, snapshots: &[Snapshot]) {
    let s = Styles::new();

    rule(&s, "Loupe Replay");
    println!("  {:<10}{}", s.label.apply_to("Script"), s.path.apply_to(script.display()));
    println!();

    for snap in snapshots {
        let state = if snap.is_zoomed {
            s.zoomed.apply_to("zoomed")
        } else {
            s.idle.apply_to("idle  ")
        };
        let space = if snap.drag_derived { "large" } else { "base " };
        println!(
            "  {:>6} ms  {}  zoom {}  focus ({:.1}, {:.1}) {}  bg {}% {}%  {}",
            snap.at_ms,
            state,
            s.value.apply_to(format!("{:.2}", snap.zoom_level)),
            snap.focus.x,
            snap.focus.y,
            s.label.apply_to(space),
            snap.background_position.x,
            snap.background_position.y,
            s.label.apply_to(&snap.label),
        );
    }
    println!();
}
