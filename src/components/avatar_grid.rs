use yew::prelude::*;

use crate::components::avatar_tile::AvatarTile;
use crate::models::{AvatarCollection, AvatarKind};

#[derive(Properties, PartialEq)]
pub struct AvatarGridProps {
    pub kind: AvatarKind,
    pub collection: AvatarCollection,
    pub visible: bool,
    #[prop_or_default]
    pub selecting: Option<u64>,
    pub onselect: Callback<u64>,
}

#[function_component(AvatarGrid)]
pub fn avatar_grid(props: &AvatarGridProps) -> Html {
    let collection = &props.collection;
    let pane_class = classes!("tab-pane", props.visible.then(|| "active"));

    let body = if collection.loading && collection.is_empty() {
        html! { <div class="loading-avatars">{"Loading avatars..."}</div> }
    } else if collection.is_empty() {
        html! {
            <div class="empty-avatars">
                {
                    match props.kind {
                        AvatarKind::Mine => "You have no avatars yet.",
                        AvatarKind::Preset => "No preset avatars available.",
                    }
                }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div id={props.kind.pane_id()} class={pane_class}>
            <div class="avatars-container">
                {
                    collection.avatars.iter().map(|avatar| {
                        html! {
                            <AvatarTile
                                key={avatar.pk.to_string()}
                                avatar={avatar.clone()}
                                pending={props.selecting == Some(avatar.pk)}
                                onselect={props.onselect.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            { body }
        </div>
    }
}
