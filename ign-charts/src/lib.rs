use anyhow::{anyhow, Result};
use ign_dataset::ScoreStats;
use plotters::{
    coord::ranged1d::{BoldPoints, SegmentValue},
    prelude::*,
    style::full_palette::GREY,
};
use plotters_svg::SVGBackend;

/// Pixel size of the rendered chart before [`prepare_figure`] strips it
pub const FIGURE_SIZE: (u32, u32) = (640, 480);

const ACCENT: RGBColor = RGBColor(0x25, 0xa8, 0x48);
const Y_LABELS: usize = 10;
// gap between the x axis and the start of a phrase label
const LABEL_OFFSET: i32 = 8;

/// Draws the bar and line chart of the stats. The x tick labels are left blank, the
/// returned points are where each phrase label belongs (under the centre of its bar),
/// in the order of [`ScoreStats::labels`].
pub fn draw_score_chart<'a, T>(
    backend: T,
    stats: &ScoreStats,
) -> Result<Vec<(i32, i32)>, Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let segments = stats.labels().count() as u32;
    let max_count = stats.max_count();
    // leave some headroom above the tallest bar, and keep a non empty range for no data
    let y_max = max_count + max_count / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d((0..segments).into_segmented(), 0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(segments as usize)
        .x_label_formatter(&|_| String::new())
        .y_labels(Y_LABELS)
        .x_desc("Score Phrase")
        .y_desc("Number of Games")
        .draw()?;

    // dashed horizontal gridlines on the same ticks the y axis labels
    let grid_style = BLACK.mix(0.3).stroke_width(1);
    let ticks = chart
        .as_coord_spec()
        .y_spec()
        .key_points(BoldPoints(Y_LABELS));
    for tick in ticks {
        chart.draw_series(DashedLineSeries::new(
            [(SegmentValue::Exact(0), tick), (SegmentValue::Last, tick)],
            2,
            3,
            grid_style,
        ))?;
    }

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(GREY.mix(0.5).filled())
            .margin(8)
            .data(
                stats
                    .counts()
                    .enumerate()
                    .map(|(i, count)| (i as u32, count)),
            ),
    )?;

    let points: Vec<_> = stats
        .counts()
        .enumerate()
        .map(|(i, count)| (SegmentValue::CenterOf(i as u32), count))
        .collect();
    chart.draw_series(LineSeries::new(points.clone(), ACCENT.stroke_width(2)))?;
    chart.draw_series(
        points
            .into_iter()
            .map(|point| Cross::new(point, 4, ACCENT.stroke_width(2))),
    )?;

    let label_anchors = (0..segments)
        .map(|i| {
            let (x, y) = chart.backend_coord(&(SegmentValue::CenterOf(i), 0));
            (x, y + LABEL_OFFSET)
        })
        .collect();

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;

    Ok(label_anchors)
}

/// Renders the stats chart as svg text, sized to fill its container
pub fn render_chart(stats: &ScoreStats) -> Result<String> {
    let mut buffer = String::new();
    let anchors = {
        let backend = SVGBackend::with_string(&mut buffer, FIGURE_SIZE);
        draw_score_chart(backend, stats).map_err(|e| anyhow!("Failed to draw chart: {}", e))?
    };
    let figure = add_rotated_labels(&buffer, stats.labels().zip(anchors));
    Ok(prepare_figure(&figure))
}

/// Appends a `<text>` element per label, anchored at its start and turned 45 degrees
/// clockwise around its anchor. The labels are written as is, without xml escaping.
pub fn add_rotated_labels<'a>(
    figure: &str,
    labels: impl IntoIterator<Item = (&'a str, (i32, i32))>,
) -> String {
    let Some(end) = figure.rfind("</svg>") else {
        return figure.to_string();
    };
    let mut output = figure[..end].to_string();
    for (label, (x, y)) in labels {
        output.push_str(&format!(
            "<text x=\"{x}\" y=\"{y}\" dy=\"0.76em\" text-anchor=\"start\" font-family=\"sans-serif\" font-size=\"11\" fill=\"#000000\" transform=\"rotate(45, {x}, {y})\">{label}</text>\n"
        ));
    }
    output.push_str(&figure[end..]);
    output
}

/// Removes the fixed height from the root `<svg>` element and makes the width relative,
/// so the figure scales with the page. Only the root element is touched.
pub fn prepare_figure(input_figure: &str) -> String {
    let Some(start) = input_figure.find("<svg") else {
        return input_figure.to_string();
    };
    let Some(tag_len) = input_figure[start..].find('>') else {
        return input_figure.to_string();
    };
    let end = start + tag_len;
    let mut tag = input_figure[start..end].to_string();
    if let Some(range) = find_attribute(&tag, "height") {
        tag.replace_range(range, "");
    }
    if let Some(range) = find_attribute(&tag, "width") {
        tag.replace_range(range, " width=\"100%\"");
    }
    [&input_figure[..start], &tag, &input_figure[end..]].concat()
}

/// Byte range of ` name="value"` including the leading whitespace
fn find_attribute(tag: &str, name: &str) -> Option<std::ops::Range<usize>> {
    let needle = format!("{name}=\"");
    tag.match_indices(&needle).find_map(|(index, _)| {
        let preceding = tag[..index].chars().next_back()?;
        if !preceding.is_whitespace() {
            return None;
        }
        let value_start = index + needle.len();
        let value_len = tag[value_start..].find('"')?;
        Some(index - preceding.len_utf8()..value_start + value_len + 1)
    })
}
