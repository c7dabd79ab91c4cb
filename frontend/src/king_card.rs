use yew::prelude::*;
use shared::King;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub king: &'static King,
    #[prop_or_default]
    pub selected: bool,
    #[prop_or_default]
    pub onselect: Option<Callback<&'static str>>,
    #[prop_or_default]
    pub children: Children,
}

/// Face of a playing card for one king. Clickable when `onselect` is set.
#[function_component(KingCard)]
pub fn king_card(props: &Props) -> Html {
    let king = props.king;
    let suit_class = suit_class(king);

    let (onclick, onkeydown) = match &props.onselect {
        Some(onselect) => {
            let on_click = onselect.clone();
            let on_key = onselect.clone();
            (
                Some(Callback::from(move |_: MouseEvent| on_click.emit(king.id))),
                Some(Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Enter" || e.key() == " " {
                        e.prevent_default();
                        on_key.emit(king.id);
                    }
                })),
            )
        }
        None => (None, None),
    };
    let clickable = props.onselect.is_some();

    html! {
        <div
            class={classes!(KING_CARD, props.selected.then_some(KING_CARD_SELECTED), clickable.then_some("cursor-pointer"))}
            data-king-id={king.id}
            role={clickable.then_some("button")}
            tabindex={clickable.then_some("0")}
            {onclick}
            {onkeydown}
        >
            <span class={classes!(CARD_CORNER_TL, suit_class)}>{format!("K {}", king.suit)}</span>
            <span class={classes!(CARD_CORNER_BR, suit_class)}>{format!("K {}", king.suit)}</span>
            <span class={classes!("text-3xl", suit_class)}>{"♛"}</span>
            <span class={classes!("text-4xl", suit_class)}>{king.suit}</span>
            <span class="mt-2 text-sm font-semibold text-gray-900 text-center">{king.name}</span>
            { for props.children.iter() }
        </div>
    }
}

pub fn suit_class(king: &King) -> &'static str {
    if king.is_red { SUIT_RED } else { SUIT_BLACK }
}
