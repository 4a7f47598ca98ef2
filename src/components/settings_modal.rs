use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_touch_gestures::GestureConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub config: GestureConfig,
    pub on_config: Callback<GestureConfig>,
    pub show_log: bool,
    pub on_toggle_log: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_log_cb = {
        let cb = props.on_toggle_log.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let tolerance_cb = {
        let cb = props.on_config.clone();
        let config = props.config;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().trim().parse::<f64>() {
                cb.emit(config.with_tap_tolerance(v));
            }
        })
    };
    let reset_cb = {
        let cb = props.on_config.clone();
        Callback::from(move |_| cb.emit(GestureConfig::default()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Tap tolerance (px)"}</span>
                    <input type="number" min="0" step="1" style="width:72px;"
                        value={props.config.tap_tolerance.to_string()}
                        onchange={tolerance_cb} />
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_log} onclick={toggle_log_cb} />
                    <span>{"Show Gesture Log"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="flex:1;">{"Reset to Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"A pointer that moves further than the tolerance before release pans instead of tapping."}</div>
        </div>
    </div>}
}
