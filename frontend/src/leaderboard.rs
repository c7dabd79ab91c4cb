use std::collections::HashSet;
use yew::prelude::*;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use stylist::{css, yew::Global};
use time::OffsetDateTime;
use web_sys::console;
use shared::{Leaderboard, Standing, TallySnapshot};
use crate::config::CONFIG;
use crate::king_card::KingCard;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or(true)]
    pub show_eliminated: bool,
}

pub enum Msg {
    Poll,
    Loaded(Result<TallySnapshot, String>),
    Flip(&'static str),
}

/// Live tally for the banquet screen, refreshed on a fixed interval.
pub struct LeaderboardDisplay {
    board: Leaderboard,
    flipped: HashSet<&'static str>,
    last_update: Option<OffsetDateTime>,
    _poll: Interval,
}

impl Component for LeaderboardDisplay {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let poll = Interval::new(CONFIG.poll_interval_ms, move || link.send_message(Msg::Poll));
        ctx.link().send_message(Msg::Poll);

        Self {
            board: Leaderboard::default(),
            flipped: HashSet::new(),
            last_update: None,
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Poll => {
                ctx.link().send_future(async { Msg::Loaded(fetch_tally().await) });
                false
            }
            Msg::Loaded(Ok(snapshot)) => {
                self.board = Leaderboard::from_snapshot(&snapshot);
                self.last_update = Some(OffsetDateTime::now_utc());
                true
            }
            Msg::Loaded(Err(e)) => {
                console::warn_1(&format!("Failed to fetch votes: {}", e).into());
                false
            }
            Msg::Flip(id) => {
                if !self.flipped.remove(id) {
                    self.flipped.insert(id);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let standings = self.board.standings(ctx.props().show_eliminated);

        html! {
            <div class={CONTAINER}>
                <Global css={css!(r#"
                    .king-card__inner { transition: transform 0.6s; transform-style: preserve-3d; position: relative; }
                    .flipped .king-card__inner { transform: rotateY(180deg); }
                    .king-card__face { backface-visibility: hidden; }
                    .king-card__back { position: absolute; inset: 0; transform: rotateY(180deg); }
                    .leading .king-card__face > div { box-shadow: 0 0 24px rgba(250, 204, 21, 0.8); }
                    .eliminated { opacity: 0.4; filter: grayscale(0.8); transition: opacity 0.6s, filter 0.6s; }
                "#)} />
                <h1 class={HEADING_LG}>{"Who will be crowned?"}</h1>
                <div class={classes!(FLEX_BETWEEN, "mb-6")}>
                    <p class="text-xl text-gray-200">
                        <span class="font-bold">{self.board.total()}</span>{" predictions"}
                    </p>
                    <p class={TEXT_MUTED}>{self.render_last_update()}</p>
                </div>
                <div class={KING_GRID}>
                    {for standings.iter().map(|standing| self.render_standing(ctx, standing))}
                </div>
            </div>
        }
    }
}

impl LeaderboardDisplay {
    fn render_standing(&self, ctx: &Context<Self>, standing: &Standing) -> Html {
        let id = standing.king.id;
        let onclick = ctx.link().callback(move |_| Msg::Flip(id));

        html! {
            <div
                key={id}
                class={classes!(
                    "king-card",
                    standing.leading.then_some("leading"),
                    standing.eliminated.then_some("eliminated"),
                    self.flipped.contains(id).then_some("flipped"),
                )}
                data-king-id={id}
                {onclick}
            >
                <div class="king-card__inner">
                    <div class="king-card__face king-card__front">
                        <KingCard king={standing.king} />
                    </div>
                    <div class="king-card__face king-card__back">
                        <KingCard king={standing.king}>
                            <span class="mt-2 text-xs text-gray-700">{standing.votes_label()}</span>
                            <div class={VOTE_BAR}>
                                <div class={VOTE_BAR_FILL} style={format!("width: {}%", standing.percent)} />
                            </div>
                        </KingCard>
                    </div>
                </div>
            </div>
        }
    }

    fn render_last_update(&self) -> String {
        match self.last_update {
            Some(at) => format!("Live · updated {:02}:{:02}:{:02} UTC", at.hour(), at.minute(), at.second()),
            None => "Connecting...".to_string(),
        }
    }
}

async fn fetch_tally() -> Result<TallySnapshot, String> {
    let response = Request::get(&format!("{}/votes", CONFIG.api_base_url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<TallySnapshot>().await.map_err(|e| e.to_string())
}
