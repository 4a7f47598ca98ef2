use super::{
    event_log::{EventLog, GestureLog},
    settings_modal::SettingsModal,
    viewport::Viewport,
};
use yew::prelude::*;
use yew_touch_gestures::{GestureConfig, GestureEvent};

const CONFIG_KEY: &str = "tg_gesture_config";
const SHOW_LOG_KEY: &str = "tg_setting_show_log";

fn load_config() -> GestureConfig {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(CONFIG_KEY) {
                match GestureConfig::from_json(&raw) {
                    Ok(cfg) => return cfg,
                    Err(err) => log::warn!("ignoring stored gesture config: {}", err),
                }
            }
        }
    }
    GestureConfig::default()
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state_eq(load_config);
    let show_log = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(v)) = store.get_item(SHOW_LOG_KEY) {
                    return !(v == "0" || v == "false");
                }
            }
        }
        true // default ON
    });
    let open_settings = use_state(|| false);
    let gesture_log = use_reducer(GestureLog::default);
    let state_label = use_state_eq(|| AttrValue::Static("idle"));

    // Persist config changes
    {
        use_effect_with(*config, move |cfg| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    match cfg.to_json() {
                        Ok(s) => {
                            let _ = store.set_item(CONFIG_KEY, &s);
                        }
                        Err(err) => log::warn!("failed to serialize gesture config: {}", err),
                    }
                }
            }
            || ()
        });
    }
    // Persist log toggle
    {
        let flag = *show_log;
        use_effect_with(flag, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item(SHOW_LOG_KEY, if flag { "1" } else { "0" });
                }
            }
            || ()
        });
    }

    let on_gesture = {
        let gesture_log = gesture_log.clone();
        Callback::from(move |event: GestureEvent| gesture_log.dispatch(event))
    };
    let on_state = {
        let state_label = state_label.clone();
        Callback::from(move |label: &'static str| state_label.set(AttrValue::Static(label)))
    };
    let on_config = {
        let config = config.clone();
        Callback::from(move |cfg: GestureConfig| {
            log::info!("tap tolerance set to {}", cfg.tap_tolerance);
            config.set(cfg);
        })
    };
    let toggle = |handle: &UseStateHandle<bool>| {
        let handle = handle.clone();
        Callback::from(move |_: ()| handle.set(!*handle))
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <Viewport
                config={*config}
                on_gesture={on_gesture}
                on_state={on_state}
                on_settings={toggle(&open_settings)}
            />
            { if *show_log {
                html!{ <EventLog entries={gesture_log.entries.clone()} state_label={(*state_label).clone()} /> }
            } else { html!{} } }
            <SettingsModal
                show={*open_settings}
                on_close={toggle(&open_settings)}
                config={*config}
                on_config={on_config}
                show_log={*show_log}
                on_toggle_log={toggle(&show_log)}
            />
        </div>
    }
}
