use std::path::Path;

use console::Style;
use zenspace_core::comparator::Boundary;
use zenspace_core::config::EditorConfig;
use zenspace_core::edit::EditKind;
use zenspace_core::mask::MaskPainter;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_mask_summary(input: &Path, painter: &MaskPainter, config: &EditorConfig) {
    let s = Styles::new();
    print_title(&s, "ZenSpace Mask");

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    if let Some((w, h)) = painter.dimensions() {
        println!("  {:<14}{}", s.label.apply_to("Surface"), s.value.apply_to(format!("{w}x{h}")));
    }
    if let Some(brush) = painter.brush() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Brush"),
            s.value.apply_to(format!(
                "{:.1} px, rgb({}, {}, {}) @ {:.0}%",
                brush.width,
                brush.color[0],
                brush.color[1],
                brush.color[2],
                brush.opacity * 100.0
            ))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Strokes"),
        s.value.apply_to(painter.strokes().len())
    );
    if painter.has_mask() {
        println!("  {:<14}{}", s.label.apply_to("Mask"), s.method.apply_to("painted"));
    } else {
        println!("  {:<14}{}", s.label.apply_to("Mask"), s.disabled.apply_to("none"));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Export"),
        s.method.apply_to(format!("{} q{}", config.export.format, config.export.quality))
    );
    println!();
}

pub fn print_compare_summary(before: &Path, after: &Path, size: (u32, u32), boundary: Boundary) {
    let s = Styles::new();
    print_title(&s, "ZenSpace Compare");

    println!("  {:<14}{}", s.label.apply_to("Before"), s.path.apply_to(before.display()));
    println!("  {:<14}{}", s.label.apply_to("After"), s.path.apply_to(after.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", size.0, size.1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Boundary"),
        s.value.apply_to(format!("{:.1}%", boundary.percent()))
    );
    println!();
}

pub fn print_request_summary(photo: &Path, kind: &EditKind) {
    let s = Styles::new();
    print_title(&s, "ZenSpace Request");

    println!("  {:<14}{}", s.label.apply_to("Photo"), s.path.apply_to(photo.display()));
    println!("  {:<14}{}", s.label.apply_to("Edit"), s.method.apply_to(kind));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Variations"),
        s.value.apply_to(kind.variation_count())
    );
    println!();
}
