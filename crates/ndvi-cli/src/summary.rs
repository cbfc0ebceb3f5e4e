use std::path::Path;

use console::Style;
use ndvi_core::color::{HealthClass, COLOR_STOPS};
use ndvi_core::engine::HeatmapEngine;
use ndvi_core::grid::NdviGrid;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_grid_summary(grid: &NdviGrid, path: &Path) {
    let s = Styles::new();
    print_title(&s, "NDVI Grid");

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{} rows x {} cols", grid.rows(), grid.cols()))
    );

    let Some((min, max)) = grid.min_max() else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Values"),
            s.disabled.apply_to("empty grid")
        );
        println!();
        return;
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!("{min:.3} .. {max:.3}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mean"),
        s.value.apply_to(format!("{:.3}", grid.mean()))
    );
    println!();

    println!("  {}", s.header.apply_to("Health Distribution"));
    let counts = grid.class_histogram();
    for class in HealthClass::ALL {
        let stop = COLOR_STOPS[class.index()];
        println!(
            "    {:<12}{:>8}  {:>6.1}%  {}",
            s.label.apply_to(class),
            s.value.apply_to(counts[class.index()]),
            grid.class_fraction(class) * 100.0,
            s.label.apply_to(format!(">= {:.2}", stop.value)),
        );
    }
    println!();
}

pub fn print_view_summary(engine: &HeatmapEngine) {
    let s = Styles::new();
    print_title(&s, "Heatmap View");

    let vp = engine.viewport();
    println!("  {}", s.header.apply_to("Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.3}x", vp.scale()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Translate"),
        s.value
            .apply_to(format!("({:.1}, {:.1})", vp.translate_x(), vp.translate_y()))
    );
    match engine.visible_range() {
        Some(r) => println!(
            "    {:<12}{}",
            s.label.apply_to("Cells"),
            s.value.apply_to(format!(
                "cols {}..={}, rows {}..={} ({} cells)",
                r.x_start,
                r.x_end,
                r.y_start,
                r.y_end,
                r.cell_count()
            ))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Cells"),
            s.disabled.apply_to("none visible")
        ),
    }
    println!();

    let stats = engine.stats();
    println!("  {}", s.header.apply_to("Legend"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min"),
        s.value.apply_to(format!("{:.3}", stats.min))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max"),
        s.value.apply_to(format!("{:.3}", stats.max))
    );
    println!();

    match engine.hover() {
        Some(h) => {
            println!("  {}", s.header.apply_to("Hover"));
            println!(
                "    {:<12}{}",
                s.label.apply_to("Cell"),
                s.value.apply_to(format!("({}, {})", h.grid_x, h.grid_y))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("NDVI"),
                s.value.apply_to(format!("{:.3}", h.value))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Color"),
                s.value.apply_to(format!(
                    "#{:02x}{:02x}{:02x}",
                    h.color.0[0], h.color.0[1], h.color.0[2]
                ))
            );
        }
        None => println!(
            "  {:<14}{}",
            s.header.apply_to("Hover"),
            s.disabled.apply_to("none")
        ),
    }
    println!();
}
