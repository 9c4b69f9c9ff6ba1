use console::style;

/// Renders a completed conversion to stdout.
pub fn render_conversion(from: &str, to: &str, amount: f64, rate: f64) {
    let converted = amount * rate;
    println!(
        "{} {} = {} {}",
        format_amount(amount),
        style(from).bold(),
        style(format_amount(converted)).green().bold(),
        style(to).bold()
    );
    println!("{}", style(format!("1 {from} = {rate} {to}")).dim());
}

fn format_amount(value: f64) -> String {
    // Trim a whole amount down to "100" instead of "100.0000".
    if value.fract() == 0.0 {
        format!("{value}")
    } else {
        format!("{value:.4}")
    }
}
