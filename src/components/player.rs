use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerMarkerProps {
    pub in_vehicle: bool,
    pub health: u32,
}

/// The avatar stays centered; the world scrolls underneath it.
#[function_component]
pub fn PlayerMarker(props: &PlayerMarkerProps) -> Html {
    let (fill, ring) = if props.in_vehicle {
        ("#58a6ff", "#1f6feb")
    } else {
        ("#f0883e", "#ffa657")
    };
    html! {
        <div style="position:absolute; left:50%; top:50%; width:16px; height:16px; transform:translate(-50%, -50%); z-index:40;">
            <div style={format!("width:100%; height:100%; border-radius:50%; background:{}; border:2px solid {}; box-shadow:0 0 8px {};", fill, ring, fill)}></div>
            <div style={format!("position:absolute; left:0; bottom:-5px; height:2px; width:{}%; background:#2ea043; border-radius:1px;", props.health.min(100))}></div>
            <div style="position:absolute; left:50%; top:-6px; width:2px; height:6px; transform:translateX(-50%); background:#c9d1d9; border-radius:1px;"></div>
        </div>
    }
}
