/// Draw one stylistic finder ornament: three concentric rounded squares
///
/// Outer square in the fill color, middle ring in white, inner square in the
/// fill color again, all sharing a corner radius proportional to the module
/// size. The ornament is a fixed overlay and ignores the matrix content
/// underneath.
pub fn finder_ornament(x: u32, y: u32, module_size: u32, finder_size: u32, color: &str) -> String {
    let outer_size = finder_size * module_size;
    let rx = module_size as f32 * 0.2;
    let inner_margin = module_size;
    let inner_size = outer_size - 2 * inner_margin;
    let center_margin = module_size;
    let center_size = inner_size - 2 * center_margin;

    let outer = format!(
        "<rect x=\"{x}\" y=\"{y}\" width=\"{outer_size}\" height=\"{outer_size}\" rx=\"{rx}\" ry=\"{rx}\" fill=\"{color}\" />"
    );
    let white = format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{inner_size}\" height=\"{inner_size}\" rx=\"{rx}\" ry=\"{rx}\" fill=\"#FFFFFF\" />",
        x + inner_margin,
        y + inner_margin,
    );
    let center = format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{center_size}\" height=\"{center_size}\" rx=\"{rx}\" ry=\"{rx}\" fill=\"{color}\" />",
        x + inner_margin + center_margin,
        y + inner_margin + center_margin,
    );

    outer + &white + &center
}
