//! SVG chart rendering.
//!
//! Produces a standalone SVG with two stacked panels: price with SMA/EMA
//! overlays, and MACD line/signal with the histogram as bars. Input slices
//! are the trailing display window, aligned by index.

const WIDTH: f64 = 800.0;
const PRICE_HEIGHT: f64 = 300.0;
const MACD_HEIGHT: f64 = 160.0;
const PADDING: f64 = 40.0;

#[derive(Debug, Clone, Copy)]
pub struct ChartInputs<'a> {
    pub symbol: &'a str,
    pub prices: &'a [f64],
    pub sma: &'a [f64],
    pub ema: &'a [f64],
    pub macd_line: &'a [f64],
    pub macd_signal: &'a [f64],
    pub histogram: &'a [f64],
}

pub fn render_chart(inputs: &ChartInputs<'_>) -> String {
    if inputs.prices.is_empty() {
        return "No chart data available.".to_string();
    }

    let total_height = PRICE_HEIGHT + MACD_HEIGHT;
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        WIDTH, total_height, WIDTH, total_height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<rect width="{:.0}" height="{:.0}" fill="white"/>"#,
        WIDTH, total_height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.0}" y="20" font-family="sans-serif" font-size="14">{}</text>"#,
        PADDING, inputs.symbol
    ));
    svg.push('\n');

    render_price_panel(&mut svg, inputs);
    render_macd_panel(&mut svg, inputs);

    svg.push_str("</svg>\n");
    svg
}

fn render_price_panel(svg: &mut String, inputs: &ChartInputs<'_>) {
    let series = [inputs.prices, inputs.sma, inputs.ema];
    let (min, max) = min_max(series.iter().flat_map(|s| s.iter().copied()));
    let panel = Panel {
        top: PADDING,
        height: PRICE_HEIGHT - 2.0 * PADDING,
        min,
        max,
        len: inputs.prices.len(),
    };

    svg.push_str(&polyline(&panel, inputs.prices, "black", 1.5));
    svg.push_str(&polyline(&panel, inputs.sma, "darkorange", 1.0));
    svg.push_str(&polyline(&panel, inputs.ema, "steelblue", 1.0));
}

fn render_macd_panel(svg: &mut String, inputs: &ChartInputs<'_>) {
    let all = inputs
        .macd_line
        .iter()
        .chain(inputs.macd_signal)
        .chain(inputs.histogram)
        .copied();
    let (min, max) = min_max(all);
    let panel = Panel {
        top: PRICE_HEIGHT + 10.0,
        height: MACD_HEIGHT - 10.0 - PADDING,
        min,
        max,
        len: inputs.macd_line.len(),
    };

    // Histogram bars from the zero line.
    let zero_y = panel.y(0.0);
    let bar_width = (panel.x_step() * 0.6).max(0.5);
    for (i, &value) in inputs.histogram.iter().enumerate() {
        let x = panel.x(i) - bar_width / 2.0;
        let y = panel.y(value);
        let (bar_y, bar_h) = if y < zero_y {
            (y, zero_y - y)
        } else {
            (zero_y, y - zero_y)
        };
        let fill = if value >= 0.0 { "seagreen" } else { "indianred" };
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" opacity="0.6"/>"#,
            x, bar_y, bar_width, bar_h, fill
        ));
        svg.push('\n');
    }

    svg.push_str(&polyline(&panel, inputs.macd_line, "black", 1.0));
    svg.push_str(&polyline(&panel, inputs.macd_signal, "crimson", 1.0));
}

struct Panel {
    top: f64,
    height: f64,
    min: f64,
    max: f64,
    len: usize,
}

impl Panel {
    fn x_step(&self) -> f64 {
        if self.len > 1 {
            (WIDTH - 2.0 * PADDING) / (self.len - 1) as f64
        } else {
            0.0
        }
    }

    fn x(&self, i: usize) -> f64 {
        PADDING + i as f64 * self.x_step()
    }

    fn y(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        let scale = if range > 0.0 { self.height / range } else { 0.0 };
        self.top + self.height - (value - self.min) * scale
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

fn polyline(panel: &Panel, values: &[f64], stroke: &str, width: f64) -> String {
    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", panel.x(i), panel.y(v)))
        .collect();

    format!(
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>{}"#,
        points.join(" "),
        stroke,
        width,
        "\n"
    )
}
