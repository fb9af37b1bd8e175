use gamedash_core::YearRange;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct YearSliderProps {
    /// Full span of years present in the dataset.
    pub span: YearRange,
    /// Distinct years, ascending, rendered as tick marks.
    pub marks: Vec<u16>,
    pub value: YearRange,
    #[prop_or_default]
    pub on_change: Callback<YearRange>,
}

/// Inclusive year-range slider built from two range inputs.
///
/// Handles may cross while dragging; the emitted range is always ordered,
/// so the filter never sees min > max.
#[function_component(YearSlider)]
pub fn year_slider(props: &YearSliderProps) -> Html {
    let on_min_input = {
        let on_change = props.on_change.clone();
        let max = props.value.max();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(year) = input.value().parse::<u16>()
            {
                on_change.emit(YearRange::new(year, max));
            }
        })
    };
    let on_max_input = {
        let on_change = props.on_change.clone();
        let min = props.value.min();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(year) = input.value().parse::<u16>()
            {
                on_change.emit(YearRange::new(min, year));
            }
        })
    };

    html! {
        <div class="year-slider" data-testid="year-slider">
            <span class="year-slider-value" aria-live="polite">
                { format!("{} - {}", props.value.min(), props.value.max()) }
            </span>
            <input
                type="range"
                aria-label="First release year"
                min={props.span.min().to_string()}
                max={props.span.max().to_string()}
                step="1"
                value={props.value.min().to_string()}
                oninput={on_min_input}
            />
            <input
                type="range"
                aria-label="Last release year"
                min={props.span.min().to_string()}
                max={props.span.max().to_string()}
                step="1"
                value={props.value.max().to_string()}
                oninput={on_max_input}
            />
            <div class="year-slider-marks">
                { for props.marks.iter().map(|year| html! {
                    <span class="mark">{ year.to_string() }</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn year_slider_renders_bounds_value_and_marks() {
        let props = YearSliderProps {
            span: YearRange::new(2000, 2010),
            marks: vec![2000, 2004, 2010],
            value: YearRange::new(2000, 2002),
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<YearSlider>::with_props(props).render());
        assert!(html.contains("2000 - 2002"));
        assert!(html.contains("min=\"2000\""));
        assert!(html.contains("max=\"2010\""));
        assert!(html.contains("2004"));
    }
}
