use log::warn;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::{DailyBookings, StatusSlice};

const BAR_BLUE: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
const AXIS_GREY: RGBColor = RGBColor(0x94, 0xa3, 0xb8);

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn draw_bookings_trend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &[DailyBookings],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    if data.is_empty() {
        return Ok(());
    }

    let max_value = data.iter().map(|point| point.value).max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(0)
        .build_cartesian_2d(0..data.len(), 0..max_value + (max_value / 10))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_style(("sans-serif", 12).into_font().color(&AXIS_GREY))
        .x_label_formatter(&|x| {
            data.get(*x)
                .map(|point| point.day.clone())
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(data.iter().enumerate().map(|(i, point)| {
        let mut bar = Rectangle::new([(i, 0), (i + 1, point.value)], BAR_BLUE.filled());
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    root.present()?;
    Ok(())
}

pub fn draw_job_status<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    slices: &[StatusSlice],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    if slices.iter().all(|slice| slice.value == 0) {
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) / 2.0 - 4.0;

    let sizes: Vec<f64> = slices.iter().map(|slice| f64::from(slice.value)).collect();
    let colors: Vec<RGBColor> = slices
        .iter()
        .map(|slice| parse_hex_color(&slice.color).unwrap_or(AXIS_GREY))
        .collect();
    // The legend sits under the canvas.
    let labels: Vec<&str> = slices.iter().map(|_| "").collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.donut_hole(radius * 0.78);
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct BookingsTrendProps {
    pub data: Vec<DailyBookings>,
}

#[function_component(BookingsTrendChart)]
pub fn bookings_trend_chart(props: &BookingsTrendProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |data: &Vec<DailyBookings>| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(backend) = CanvasBackend::with_canvas_object(canvas) {
                        if let Err(err) = draw_bookings_trend(&backend.into_drawing_area(), data) {
                            warn!("Failed to draw bookings trend: {:?}", err);
                        }
                    }
                }
                || ()
            },
            props.data.clone(),
        );
    }

    html! {
        <canvas ref={canvas_ref} width="640" height="256" style="max-width: 100%;" />
    }
}

#[derive(Properties, PartialEq)]
pub struct JobStatusProps {
    pub slices: Vec<StatusSlice>,
}

#[function_component(JobStatusChart)]
pub fn job_status_chart(props: &JobStatusProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |slices: &Vec<StatusSlice>| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(backend) = CanvasBackend::with_canvas_object(canvas) {
                        if let Err(err) = draw_job_status(&backend.into_drawing_area(), slices) {
                            warn!("Failed to draw job status: {:?}", err);
                        }
                    }
                }
                || ()
            },
            props.slices.clone(),
        );
    }

    html! {
        <div class="job-status">
            <canvas ref={canvas_ref} width="224" height="224" />
            <div class="job-status-legend">
                { for props.slices.iter().map(|slice| html! {
                    <div class="legend-item" key={slice.name.clone()}>
                        <span style={format!("color: {};", slice.color)}>{&slice.name}</span>
                        <span class="legend-value">{slice.value}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3b82f6"), Some(RGBColor(0x3b, 0x82, 0xf6)));
        assert_eq!(parse_hex_color("fbbf24"), Some(RGBColor(0xfb, 0xbf, 0x24)));
        assert_eq!(parse_hex_color("#EF4444"), Some(RGBColor(0xef, 0x44, 0x44)));
    }

    #[test]
    fn test_parse_hex_color_rejects_junk() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_bundled_slice_colours_parse() {
        for slice in crate::content::dashboard().job_status {
            assert!(parse_hex_color(&slice.color).is_some(), "bad colour {}", slice.color);
        }
    }
}
