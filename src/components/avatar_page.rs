use yew::prelude::*;

use crate::components::avatar_grid::AvatarGrid;
use crate::config::PageConfig;
use crate::models::{Avatar, AvatarCatalog, AvatarKind, SelectionOutcome};
use crate::services::alert;
use crate::services::api::{ApiError, AvatarApi};
use crate::services::nav;

pub enum Msg {
    ShowTab(AvatarKind),
    Loaded(AvatarKind, Result<Vec<Avatar>, ApiError>),
    Select(AvatarKind, u64),
    Selected(AvatarKind, u64, Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct AvatarPageProps {
    pub config: PageConfig,
}

pub struct AvatarPage {
    api: AvatarApi,
    catalog: AvatarCatalog,
}

impl AvatarPage {
    fn load(&mut self, ctx: &Context<Self>, kind: AvatarKind) {
        if !self.catalog.begin_load(kind) {
            return;
        }
        log::debug!("loading {:?} avatars", kind);
        let api = self.api.clone();
        ctx.link().send_future(async move {
            let result = match kind {
                AvatarKind::Mine => api.fetch_my_avatars().await,
                AvatarKind::Preset => api.fetch_preset_avatars().await,
            };
            Msg::Loaded(kind, result)
        });
    }

    fn select(&mut self, ctx: &Context<Self>, kind: AvatarKind, pk: u64) -> bool {
        if !self.catalog.begin_selection(kind, pk) {
            log::debug!("ignoring click on {:?} avatar {}", kind, pk);
            return false;
        }
        let api = self.api.clone();
        ctx.link().send_future(async move {
            let result = match kind {
                AvatarKind::Mine => api.activate(pk).await,
                AvatarKind::Preset => api.select_preset(pk).await,
            };
            Msg::Selected(kind, pk, result)
        });
        true
    }
}

impl Component for AvatarPage {
    type Message = Msg;
    type Properties = AvatarPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.clone();
        let initial_tab = config.initial_tab;
        ctx.link().send_message(Msg::ShowTab(initial_tab));

        Self {
            api: AvatarApi::new(config),
            catalog: AvatarCatalog::new(initial_tab),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowTab(kind) => {
                self.catalog.active_tab = kind;
                self.load(ctx, kind);
                true
            }
            Msg::Loaded(kind, Ok(avatars)) => {
                log::debug!("loaded {} {:?} avatars", avatars.len(), kind);
                let fresh = self.catalog.finish_load(kind, avatars);
                if !fresh && self.catalog.active_tab == kind {
                    log::debug!("{:?} avatars changed during load, reloading", kind);
                    self.load(ctx, kind);
                }
                true
            }
            Msg::Loaded(kind, Err(e)) => {
                log::error!("loading {:?} avatars failed: {}", kind, e);
                self.catalog.fail_load(kind);
                let (level, message) = alert::load_failed(kind);
                alert::notify(level, message);
                true
            }
            Msg::Select(kind, pk) => self.select(ctx, kind, pk),
            Msg::Selected(kind, pk, result) => {
                if let Err(e) = &result {
                    log::error!("selecting {:?} avatar {} failed: {}", kind, pk, e);
                }
                let outcome = self.catalog.finish_selection(kind, pk, result.is_ok());
                match &outcome {
                    SelectionOutcome::Changed(avatar) => {
                        nav::update_nav_avatar(&avatar.avatar_url);
                    }
                    SelectionOutcome::Missing => {
                        log::warn!("avatar {} accepted but no longer listed", pk)
                    }
                    SelectionOutcome::Rejected => {}
                }
                if let Some((level, message)) = alert::for_selection(&outcome) {
                    alert::notify(level, message);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let tabs = [AvatarKind::Mine, AvatarKind::Preset];

        html! {
            <div class="avatar-picker">
                <ul id="avatar-tabs" class="nav nav-tabs" role="tablist">
                    {
                        tabs.iter().map(|&kind| {
                            let active = self.catalog.active_tab == kind;
                            let onclick = ctx.link().callback(move |e: MouseEvent| {
                                e.prevent_default();
                                Msg::ShowTab(kind)
                            });
                            html! {
                                <li class="nav-item">
                                    <a
                                        id={kind.tab_id()}
                                        href={format!("#{}", kind.pane_id())}
                                        class={classes!("nav-link", active.then(|| "active"))}
                                        role="tab"
                                        onclick={onclick}
                                    >
                                        { kind.label() }
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
                <div class="tab-content">
                    {
                        tabs.iter().map(|&kind| {
                            html! {
                                <AvatarGrid
                                    kind={kind}
                                    collection={self.catalog.collection(kind).clone()}
                                    visible={self.catalog.active_tab == kind}
                                    selecting={self.catalog.selecting}
                                    onselect={ctx.link().callback(move |pk: u64| Msg::Select(kind, pk))}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        }
    }
}
