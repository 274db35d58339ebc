use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct RatingStarsProps {
    /// Average rating, 0.0 to 5.0.
    pub value: f64,
    /// Review count shown after the stars when present.
    #[prop_or_default]
    pub count: Option<i64>,
}

/// Whole stars to fill for an average rating.
fn filled_stars(value: f64) -> usize {
    value.round().clamp(0.0, 5.0) as usize
}

#[function_component(RatingStars)]
pub fn rating_stars(props: &RatingStarsProps) -> Html {
    let filled = filled_stars(props.value);

    html! {
        <div class="flex items-center gap-1" title={format!("{:.1} out of 5", props.value)}>
            { for (0..5).map(|index| {
                let icon_id = if index < filled {
                    IconId::HeroiconsSolidStar
                } else {
                    IconId::HeroiconsOutlineStar
                };
                html! { <Icon {icon_id} width="16" height="16" /> }
            }) }
            {
                props.count.map_or_else(
                    || html! {},
                    |count| html! {
                        <span class="text-xs text-base-content/70 ml-1">
                            { format!("({count})") }
                        </span>
                    },
                )
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_round_to_the_nearest_star() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(4.4), 4);
        assert_eq!(filled_stars(4.5), 5);
        assert_eq!(filled_stars(5.0), 5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(9.0), 5);
    }
}
