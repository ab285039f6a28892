use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::count_up::{CountUp, FRAME_MS};
use crate::animation::reveal::{use_revealed, RevealItem, Variants};
use crate::components::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: f64,
    pub suffix: String,
    pub icon: Icon,
    pub index: usize,
    #[prop_or(Variants::ITEM)]
    pub variants: Variants,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let revealed = use_revealed();
    let elapsed = use_state(|| 0u32);
    let count = CountUp::new(props.value);

    // Restart the count when the value changes.
    {
        let setter = elapsed.setter();
        let current = *elapsed;
        use_effect_with_deps(
            move |_| {
                if current != 0 {
                    setter.set(0);
                }
                || ()
            },
            props.value.to_bits(),
        );
    }

    // One frame per render while revealed; nothing is scheduled once the count lands.
    {
        let setter = elapsed.setter();
        use_effect_with_deps(
            move |(revealed, elapsed, _)| {
                let timeout = if *revealed {
                    count.next_tick(*elapsed).map(|next| {
                        Timeout::new(FRAME_MS, move || setter.set(next))
                    })
                } else {
                    None
                };
                move || drop(timeout)
            },
            (revealed, *elapsed, props.value.to_bits()),
        );
    }

    let shown = if revealed { count.display_at(*elapsed) } else { count.display_at(0) };

    html! {
        <RevealItem index={props.index} variants={props.variants} class="stat-card">
            <div class="stat-icon">{ props.icon.render("stat-icon-svg") }</div>
            <div class="stat-text">
                <p class="stat-value">{ format!("{}{}", shown, props.suffix) }</p>
                <p class="stat-label">{ &props.label }</p>
            </div>
        </RevealItem>
    }
}
