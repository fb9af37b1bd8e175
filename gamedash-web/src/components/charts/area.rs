use yew::prelude::*;

use super::Frame;
use crate::charts::{AreaChartSpec, color_for};

#[derive(Properties, PartialEq, Clone)]
pub struct AreaChartProps {
    pub spec: AreaChartSpec,
}

/// Stacked-area distribution chart: x = year of release, y = number of
/// games, one layer per platform.
#[function_component(AreaChart)]
pub fn area_chart(props: &AreaChartProps) -> Html {
    let spec = &props.spec;
    let frame = Frame::standard();
    let max = spec.stacked_max().max(1) as f32;

    let year_fraction = |year: u16| -> f32 {
        let min = *spec.years.first().unwrap_or(&year);
        let span = spec.years.last().unwrap_or(&year) - min;
        if span == 0 {
            // Single-year subsets collapse the x domain; center the column.
            0.5
        } else {
            f32::from(year - min) / f32::from(span)
        }
    };
    let xs: Vec<f32> = spec.years.iter().map(|&y| frame.x(year_fraction(y))).collect();

    // Stack the series bottom-up: each layer's floor is the running total of
    // the layers beneath it.
    let mut floor = vec![0_usize; spec.years.len()];
    let mut layers: Vec<Html> = Vec::with_capacity(spec.series.len());
    for (index, series) in spec.series.iter().enumerate() {
        let lower: Vec<f32> = floor.iter().map(|&v| frame.y(v as f32 / max)).collect();
        for (total, count) in floor.iter_mut().zip(&series.counts) {
            *total += count;
        }
        let upper: Vec<f32> = floor.iter().map(|&v| frame.y(v as f32 / max)).collect();

        let mut points = String::new();
        for (x, y) in xs.iter().zip(&upper) {
            points.push_str(&format!("{x:.1},{y:.1} "));
        }
        for (x, y) in xs.iter().zip(&lower).rev() {
            points.push_str(&format!("{x:.1},{y:.1} "));
        }
        let outline: String = xs
            .iter()
            .zip(&upper)
            .map(|(x, y)| format!("{x:.1},{y:.1} "))
            .collect();
        let color = color_for(index);

        layers.push(html! {
            <g class="layer" data-platform={series.platform.clone()}>
                <polygon points={points} fill={color} fill-opacity="0.6" />
                <polyline points={outline} fill="none" stroke={color} stroke-width="2" />
                { for xs.iter().zip(&upper).map(|(x, y)| html! {
                    <circle cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="2.5" fill={color} />
                })}
            </g>
        });
    }

    let y_step = ((max / 5.0).ceil() as usize).max(1);
    let y_ticks: Vec<usize> = (0..).map(|i| i * y_step).take_while(|&v| v as f32 <= max).collect();

    html! {
        <svg
            class="chart area-chart"
            viewBox={format!("0 0 {} {}", frame.width, frame.height)}
            role="img"
            aria-label={spec.title.clone()}
        >
            <text x={format!("{}", frame.left)} y="20" class="chart-title" font-size="14">
                { spec.title.clone() }
            </text>
            <line
                x1={format!("{}", frame.left)} y1={format!("{}", frame.height - frame.bottom)}
                x2={format!("{}", frame.width - frame.right)} y2={format!("{}", frame.height - frame.bottom)}
                stroke="#9ca3af"
            />
            <line
                x1={format!("{}", frame.left)} y1={format!("{}", frame.top)}
                x2={format!("{}", frame.left)} y2={format!("{}", frame.height - frame.bottom)}
                stroke="#9ca3af"
            />
            { for y_ticks.iter().map(|&tick| {
                let y = frame.y(tick as f32 / max);
                html! {
                    <g>
                        <line
                            x1={format!("{}", frame.left)} y1={format!("{y:.1}")}
                            x2={format!("{}", frame.width - frame.right)} y2={format!("{y:.1}")}
                            stroke="#e5e7eb"
                        />
                        <text x={format!("{}", frame.left - 8.0)} y={format!("{:.1}", y + 4.0)}
                            text-anchor="end" font-size="11">
                            { tick.to_string() }
                        </text>
                    </g>
                }
            })}
            { for spec.years.iter().zip(&xs).map(|(year, x)| html! {
                <text x={format!("{x:.1}")} y={format!("{}", frame.height - frame.bottom + 18.0)}
                    text-anchor="middle" font-size="11">
                    { year.to_string() }
                </text>
            })}
            { for layers }
            { for spec.series.iter().enumerate().map(|(index, series)| {
                let y = frame.top + index as f32 * 18.0;
                let x = frame.width - frame.right + 16.0;
                html! {
                    <g class="legend-entry">
                        <rect x={format!("{x:.1}")} y={format!("{:.1}", y - 9.0)}
                            width="12" height="12" fill={color_for(index)} />
                        <text x={format!("{:.1}", x + 18.0)} y={format!("{:.1}", y + 2.0)} font-size="12">
                            { series.platform.clone() }
                        </text>
                    </g>
                }
            })}
            <text x={format!("{}", frame.left + frame.plot_width() / 2.0)}
                y={format!("{}", frame.height - 8.0)} text-anchor="middle" font-size="12">
                { spec.x_label.clone() }
            </text>
            <text x="16" y={format!("{}", frame.top + frame.plot_height() / 2.0)}
                text-anchor="middle" font-size="12"
                transform={format!("rotate(-90, 16, {})", frame.top + frame.plot_height() / 2.0)}>
                { spec.y_label.clone() }
            </text>
        </svg>
    }
}
