use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::site_root::{use_lang, use_site_config};
use crate::components::viewport::use_viewport_trigger;
use crate::core::counter::{StatKey, StatsCounter, Tick};
use crate::core::timing::Ticker;
use crate::t;

const STATS_REGION: &str = "stats";

/// Steps `counter` on a timer from the moment `triggered` turns true.
///
/// A single ticker task runs per counter. It ends on the final step and is
/// cancelled if the calling component unmounts first.
pub fn use_stats_ticker(triggered: ReadOnlySignal<bool>, mut counter: Signal<StatsCounter>) {
    let timer: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));

    let start_slot = timer.clone();
    use_effect(move || {
        let visible = triggered();
        if !counter.with_mut(|c| c.on_trigger(visible)) {
            return;
        }
        let interval_ms = counter.peek().plan().interval_ms();
        let done_slot = start_slot.clone();
        let task = spawn(async move {
            let mut ticker = Ticker::new(interval_ms);
            loop {
                ticker.tick().await;
                if counter.with_mut(|c| c.tick()) != Tick::Advanced {
                    break;
                }
            }
            tracing::debug!("stats counter finished");
            done_slot.set(None);
        });
        start_slot.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = timer.take() {
            task.cancel();
        }
    });
}

fn stat_label(key: StatKey, lang: api::Lang) -> String {
    match key {
        StatKey::Children => t!(lang, "stat-children"),
        StatKey::Satisfaction => t!(lang, "stat-satisfaction"),
        StatKey::Years => t!(lang, "stat-years"),
        StatKey::Specialists => t!(lang, "stat-specialists"),
    }
}

/// "Achievements in numbers" band. Counts up from zero once it scrolls
/// into view, then holds the final values.
#[component]
pub fn StatsSection() -> Element {
    let lang = use_lang()();
    let config = use_site_config();
    let triggered = use_viewport_trigger(STATS_REGION);
    let counter = use_signal(|| StatsCounter::new(config.stats.targets.clone(), config.stats.plan()));
    use_stats_ticker(triggered, counter);

    let values: Vec<_> = counter.read().values().collect();

    rsx! {
        section { id: STATS_REGION, class: "section section--stats",
            div { class: "container",
                h2 { class: "section__title section__title--light", {t!(lang, "home-stats-title")} }
                div { class: "stats-grid",
                    for (target, value) in values {
                        div { key: "{target.key.name()}", class: "stat stat--{target.key.name()}",
                            div { class: "stat__value", "{value}{target.key.suffix()}" }
                            p { class: "stat__label", {stat_label(target.key, lang)} }
                        }
                    }
                }
            }
        }
    }
}
