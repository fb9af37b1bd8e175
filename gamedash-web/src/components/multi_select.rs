use std::collections::BTreeSet;

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MultiSelectProps {
    /// Control caption, e.g. "Genre".
    pub label: AttrValue,
    /// Shown while nothing is checked, e.g. "Select a genre".
    pub placeholder: AttrValue,
    /// One checkbox per option, in the given order.
    pub options: Vec<AttrValue>,
    pub selected: BTreeSet<String>,
    #[prop_or_default]
    pub on_toggle: Callback<String>,
}

/// Multi-select dropdown rendered as a checkbox list.
///
/// Toggling a box emits the option's value; the owner inserts or removes it
/// from the selection set, so the filter core only ever sees proper sets.
#[function_component(MultiSelect)]
pub fn multi_select(props: &MultiSelectProps) -> Html {
    html! {
        <fieldset class="multi-select">
            <legend>{ props.label.clone() }</legend>
            if props.selected.is_empty() {
                <p class="placeholder">{ props.placeholder.clone() }</p>
            }
            <ul>
                { for props.options.iter().map(|option| {
                    let value = option.to_string();
                    let checked = props.selected.contains(&value);
                    let onchange = props.on_toggle.reform(move |_: Event| value.clone());
                    html! {
                        <li>
                            <label class="option">
                                <input type="checkbox" {checked} {onchange} />
                                <span>{ option.clone() }</span>
                            </label>
                        </li>
                    }
                })}
            </ul>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn options() -> Vec<AttrValue> {
        vec![
            AttrValue::from("Action"),
            AttrValue::from("Role-Playing"),
            AttrValue::from("Sports"),
        ]
    }

    #[test]
    fn multi_select_renders_every_option() {
        let props = MultiSelectProps {
            label: AttrValue::from("Genre"),
            placeholder: AttrValue::from("Select a genre"),
            options: options(),
            selected: BTreeSet::new(),
            on_toggle: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MultiSelect>::with_props(props).render());
        assert!(html.contains("Genre"));
        assert!(html.contains("Role-Playing"));
        assert!(html.contains("Select a genre"));
    }

    #[test]
    fn multi_select_checks_selected_options_and_hides_placeholder() {
        let props = MultiSelectProps {
            label: AttrValue::from("Genre"),
            placeholder: AttrValue::from("Select a genre"),
            options: options(),
            selected: BTreeSet::from(["Sports".to_string()]),
            on_toggle: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MultiSelect>::with_props(props).render());
        assert!(html.contains("checked"));
        assert!(!html.contains("Select a genre"));
    }
}
