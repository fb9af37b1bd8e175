use yew::prelude::*;

use super::Frame;
use crate::charts::{ScatterChartSpec, color_for};

// Score axes use the natural domains of the data: user scores run 0-10,
// critic scores 0-100.
const USER_SCORE_MAX: f32 = 10.0;
const CRITIC_SCORE_MAX: f32 = 100.0;

#[derive(Properties, PartialEq, Clone)]
pub struct ScatterChartProps {
    pub spec: ScatterChartSpec,
}

/// Critic-vs-user score scatter, one dot per game, colored by genre.
#[function_component(ScatterChart)]
pub fn scatter_chart(props: &ScatterChartProps) -> Html {
    let spec = &props.spec;
    let frame = Frame::standard();

    let x_ticks = [0.0_f32, 2.0, 4.0, 6.0, 8.0, 10.0];
    let y_ticks = [0.0_f32, 20.0, 40.0, 60.0, 80.0, 100.0];

    html! {
        <svg
            class="chart scatter-chart"
            viewBox={format!("0 0 {} {}", frame.width, frame.height)}
            role="img"
            aria-label={spec.title.clone()}
        >
            <text x={format!("{}", frame.left)} y="20" class="chart-title" font-size="14">
                { spec.title.clone() }
            </text>
            { for y_ticks.iter().map(|&tick| {
                let y = frame.y(tick / CRITIC_SCORE_MAX);
                html! {
                    <g>
                        <line
                            x1={format!("{}", frame.left)} y1={format!("{y:.1}")}
                            x2={format!("{}", frame.width - frame.right)} y2={format!("{y:.1}")}
                            stroke="#e5e7eb"
                        />
                        <text x={format!("{}", frame.left - 8.0)} y={format!("{:.1}", y + 4.0)}
                            text-anchor="end" font-size="11">
                            { format!("{tick:.0}") }
                        </text>
                    </g>
                }
            })}
            { for x_ticks.iter().map(|&tick| {
                let x = frame.x(tick / USER_SCORE_MAX);
                html! {
                    <text x={format!("{x:.1}")} y={format!("{}", frame.height - frame.bottom + 18.0)}
                        text-anchor="middle" font-size="11">
                        { format!("{tick:.0}") }
                    </text>
                }
            })}
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
            { for spec.points.iter().map(|point| {
                let x = frame.x((point.user_score / USER_SCORE_MAX).clamp(0.0, 1.0));
                let y = frame.y((point.critic_score / CRITIC_SCORE_MAX).clamp(0.0, 1.0));
                html! {
                    <circle
                        cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="4"
                        fill={color_for(point.genre)} fill-opacity="0.8"
                    />
                }
            })}
            { for spec.legend.iter().enumerate().map(|(index, genre)| {
                let y = frame.top + index as f32 * 18.0;
                let x = frame.width - frame.right + 16.0;
                html! {
                    <g class="legend-entry">
                        <rect x={format!("{x:.1}")} y={format!("{:.1}", y - 9.0)}
                            width="12" height="12" fill={color_for(index)} />
                        <text x={format!("{:.1}", x + 18.0)} y={format!("{:.1}", y + 2.0)} font-size="12">
                            { genre.clone() }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::scatter_chart as build_spec;
    use futures::executor::block_on;
    use gamedash_core::ScorePair;
    use yew::LocalServerRenderer;

    fn pair(user: f32, critic: f32, genre: &str) -> ScorePair {
        ScorePair {
            user_score: user,
            critic_score: critic,
            genre: genre.to_string(),
        }
    }

    #[test]
    fn scatter_chart_renders_a_dot_per_pair_and_the_legend() {
        let spec = build_spec(&[
            pair(7.5, 80.0, "RPG"),
            pair(9.0, 90.0, "Action"),
            pair(8.0, 85.0, "RPG"),
        ])
        .expect("non-empty");
        let props = ScatterChartProps { spec };
        let html = block_on(LocalServerRenderer::<ScatterChart>::with_props(props).render());
        assert!(html.contains("Critics and users scores"));
        assert_eq!(html.matches("<circle").count(), 3);
        assert!(html.contains("RPG"));
        assert!(html.contains("Action"));
        assert!(html.contains("User score"));
        assert!(html.contains("Critic score"));
    }
}
