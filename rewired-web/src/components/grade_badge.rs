use shared::models::Grade;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradeBadgeProps {
    pub grade: Grade,
}

fn badge_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "badge-success",
        Grade::B => "badge-info",
        Grade::C => "badge-warning",
    }
}

/// Cosmetic grade chip. The condition wording rides along as a tooltip.
#[function_component(GradeBadge)]
pub fn grade_badge(props: &GradeBadgeProps) -> Html {
    html! {
        <span
            class={classes!("badge", badge_color(props.grade))}
            title={props.grade.condition()}
        >
            { format!("Grade {}", props.grade.as_str()) }
        </span>
    }
}
