use yew::prelude::*;

use crate::models::Avatar;

#[derive(Properties, PartialEq)]
pub struct AvatarTileProps {
    pub avatar: Avatar,
    #[prop_or_default]
    pub pending: bool,
    pub onselect: Callback<u64>,
}

#[function_component(AvatarTile)]
pub fn avatar_tile(props: &AvatarTileProps) -> Html {
    let pk = props.avatar.pk;
    let onclick = {
        let onselect = props.onselect.clone();
        Callback::from(move |_: MouseEvent| onselect.emit(pk))
    };

    let class = classes!(
        "avatar-tile",
        props.avatar.active.then(|| "active"),
        props.pending.then(|| "pending"),
    );

    html! {
        <div class={class} data-avatar-pk={pk.to_string()} onclick={onclick}>
            <div>
                <img src={props.avatar.avatar_url.clone()} alt="avatar" />
            </div>
        </div>
    }
}
