use yew::prelude::*;
use gloo_net::http::Request;
use web_sys::{console, HtmlInputElement};
use shared::{
    BallotFlow, Effect, Error, ErrorCode, ErrorResponse, Stage, VoteRequest, VoteResponse, KINGS,
};
use crate::config::CONFIG;
use crate::king_card::KingCard;
use crate::storage::{load_ballot, save_ballot};
use crate::styles::*;

pub enum Msg {
    NameChanged(String),
    SubmitName,
    Toggle(&'static str),
    Confirm,
    Submitted(Result<VoteResponse, Error>),
    ChangePrediction,
}

pub struct Ballot {
    flow: BallotFlow,
    name_input: String,
}

impl Component for Ballot {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let stored = load_ballot();
        let name_input = stored.as_ref().map(|b| b.name.clone()).unwrap_or_default();
        Self {
            flow: BallotFlow::resume(stored),
            name_input,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(name) => {
                self.name_input = name;
                false
            }
            Msg::SubmitName => {
                let effect = self.flow.submit_name(&self.name_input);
                self.run(ctx, effect);
                true
            }
            Msg::Toggle(id) => self.flow.toggle(id),
            Msg::Confirm => {
                let effect = self.flow.confirm();
                self.run(ctx, effect);
                true
            }
            Msg::Submitted(Ok(_)) => {
                let effect = self.flow.submission_succeeded();
                self.run(ctx, effect);
                true
            }
            Msg::Submitted(Err(error)) => {
                console::warn_1(&format!("Vote submission failed: {}", error).into());
                self.flow.submission_failed(error.message);
                true
            }
            Msg::ChangePrediction => {
                self.flow.change_prediction();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER_SM}>
                <h1 class={HEADING_LG}>{"Miradas! Lac Banquet"}</h1>
                {match self.flow.stage() {
                    Stage::NameEntry => self.render_name_entry(ctx),
                    Stage::Selection | Stage::Submitting => self.render_selection(ctx),
                    Stage::Confirmation => self.render_confirmation(ctx),
                }}
            </div>
        }
    }
}

impl Ballot {
    fn run(&self, ctx: &Context<Self>, effect: Option<Effect>) {
        match effect {
            Some(Effect::Persist(ballot)) => save_ballot(&ballot),
            Some(Effect::Submit(request)) => {
                ctx.link().send_future(async move { Msg::Submitted(submit_vote(&request).await) });
            }
            None => {}
        }
    }

    fn render_name_entry(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitName
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            Msg::NameChanged(e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <form class={SPACE_Y_LG} {onsubmit}>
                <label class={TEXT_LABEL} for="input-name">{"Your name"}</label>
                <input
                    id="input-name"
                    class={INPUT_BASE}
                    type="text"
                    autocomplete="name"
                    placeholder="Enter your name"
                    value={self.name_input.clone()}
                    {oninput}
                />
                <button type="submit" class={button_primary(true)}>{"Continue"}</button>
            </form>
        }
    }

    fn render_selection(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.flow.stage() == Stage::Submitting;
        let onselect = ctx.link().callback(Msg::Toggle);

        html! {
            <div class={SPACE_Y_LG}>
                <p class={TEXT_MUTED}>{format!("Who will be crowned, {}?", self.flow.name())}</p>
                <div class={KING_GRID}>
                    {for KINGS.iter().map(|king| html! {
                        <KingCard
                            key={king.id}
                            king={king}
                            selected={self.flow.is_selected(king.id)}
                            onselect={(!submitting).then(|| onselect.clone())}
                        />
                    })}
                </div>
                {if let Some(error) = self.flow.error() {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}
                <button
                    type="button"
                    class={button_primary(true)}
                    disabled={!self.flow.can_confirm()}
                    onclick={ctx.link().callback(|_| Msg::Confirm)}
                >
                    {if submitting { "Placing your bet..." } else { "Place your bet" }}
                </button>
            </div>
        }
    }

    fn render_confirmation(&self, ctx: &Context<Self>) -> Html {
        let Some(king) = self.flow.confirmed() else {
            return html! {};
        };

        html! {
            <div class={classes!(SPACE_Y_LG, "text-center")}>
                <p class="text-lg text-gray-200">
                    {"Your prediction, "}<span class="font-semibold">{self.flow.name()}</span>{":"}
                </p>
                <div class="flex justify-center">
                    <KingCard king={king} selected={true} />
                </div>
                <p class={HEADING_SM}>{king.label()}</p>
                <button
                    type="button"
                    class={combine_classes(BUTTON_BASE, BUTTON_SECONDARY)}
                    onclick={ctx.link().callback(|_| Msg::ChangePrediction)}
                >
                    {"Change prediction"}
                </button>
            </div>
        }
    }
}

async fn submit_vote(request: &VoteRequest) -> Result<VoteResponse, Error> {
    let unreachable = |e: gloo_net::Error| {
        Error::with_details(ErrorCode::StoreOperationFailed, "Could not reach the server. Please try again.", e.to_string())
    };

    let response = Request::post(&format!("{}/vote", CONFIG.api_base_url))
        .json(request)
        .map_err(unreachable)?
        .send()
        .await
        .map_err(unreachable)?;

    if response.ok() {
        return response.json::<VoteResponse>().await.map_err(unreachable);
    }

    let code = ErrorCode::from_status_code(response.status()).unwrap_or(ErrorCode::StoreOperationFailed);
    let server_message = response.json::<ErrorResponse>().await.ok().map(|body| body.error);
    let message = match code {
        ErrorCode::InvalidInput => server_message.unwrap_or_else(|| "Please check your name and choice.".into()),
        ErrorCode::StoreUnconfigured => "Voting is not open yet: the vote database is not configured.".into(),
        _ => "Failed to record vote. Please try again.".into(),
    };
    Err(Error::new(code, message))
}
