use std::rc::Rc;
use yew::Reducible;
use yew::prelude::*;
use yew_touch_gestures::GestureEvent;

/// Entries kept in the on-screen log.
pub const LOG_CAPACITY: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub seq: u64,
    pub name: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureLog {
    pub entries: Vec<LogEntry>,
    next_seq: u64,
}

impl Reducible for GestureLog {
    type Action = GestureEvent;

    fn reduce(self: Rc<Self>, event: GestureEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        let detail = event.detail().map(|v| v.to_string()).unwrap_or_default();
        next.entries.push(LogEntry {
            seq: next.next_seq,
            name: event.name(),
            detail,
        });
        next.next_seq += 1;
        if next.entries.len() > LOG_CAPACITY {
            let excess = next.entries.len() - LOG_CAPACITY;
            next.entries.drain(..excess);
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventLogProps {
    pub entries: Vec<LogEntry>,
    pub state_label: AttrValue,
}

fn name_color(name: &str) -> &'static str {
    if name == "tap" {
        "#d4af37"
    } else if name.starts_with("pan") {
        "#58a6ff"
    } else {
        "#2ea043"
    }
}

#[function_component]
pub fn EventLog(props: &EventLogProps) -> Html {
    let row_style = "display:flex; gap:8px; align-items:baseline;";
    html! {
        <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:260px; max-width:360px; display:flex; flex-direction:column; gap:6px; font-size:12px;">
            <div style="display:flex; justify-content:space-between; font-weight:600; font-size:14px;">
                <span>{"Gestures"}</span>
                <span style="color:#8b949e; font-weight:500;">{ props.state_label.clone() }</span>
            </div>
            { if props.entries.is_empty() {
                html!{<div style="color:#8b949e;">{"Tap, drag or pinch the grid."}</div>}
            } else { html!{} } }
            { for props.entries.iter().rev().map(|e| html!{
                <div key={e.seq} style={row_style}>
                    <span style={format!("min-width:74px; font-weight:600; color:{};", name_color(e.name))}>{ e.name }</span>
                    <span style="font-family:monospace; color:#c9d1d9; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ e.detail.clone() }</span>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_touch_gestures::Point;
    use yew_touch_gestures::events::TapDetail;

    #[test]
    fn log_keeps_only_the_latest_entries() {
        let mut history = Rc::new(GestureLog::default());
        for i in 0..20 {
            let event = if i % 2 == 0 {
                GestureEvent::PinchEnd
            } else {
                GestureEvent::Tap(TapDetail {
                    tapped_coordinates: Point::new(i as f64, 0.0),
                })
            };
            history = history.reduce(event);
        }
        assert_eq!(history.entries.len(), LOG_CAPACITY);
        assert_eq!(history.entries.first().map(|e| e.seq), Some(8));
        let last = history.entries.last().unwrap();
        assert_eq!(last.seq, 19);
        assert_eq!(last.name, "tap");
        assert_eq!(last.detail, r#"{"tappedCoordinates":{"x":19.0,"y":0.0}}"#);
    }
}
