use crate::charts::count_sentence;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CountBannerProps {
    pub games: usize,
}

/// The live record-count sentence. Shown even when nothing is selected,
/// reporting zero.
#[function_component(CountBanner)]
pub fn count_banner(props: &CountBannerProps) -> Html {
    html! {
        <p class="count-banner" aria-live="polite" data-testid="count-banner">
            { count_sentence(props.games) }
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn count_banner_renders_the_sentence() {
        let props = CountBannerProps { games: 7 };
        let html = block_on(LocalServerRenderer::<CountBanner>::with_props(props).render());
        assert!(html.contains("The number of selected games is 7"));
    }

    #[test]
    fn count_banner_renders_zero() {
        let props = CountBannerProps { games: 0 };
        let html = block_on(LocalServerRenderer::<CountBanner>::with_props(props).render());
        assert!(html.contains("The number of selected games is 0"));
    }
}
