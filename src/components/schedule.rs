//! Schedule Page
//!
//! Time/day-bound playlist bindings. Creation is permissive on purpose:
//! overlaps, empty day sets, and inverted time ranges all go through.

use leptos::prelude::*;

use crate::models::{MealTime, Weekday};
use crate::stores::{NewSchedule, ScheduleStore, ScheduleUpdate};
use crate::components::DeleteConfirmButton;

/// Playlist choices offered by the create form. Schedules bind playlists
/// by name; duplicate names bind ambiguously.
const PLAYLIST_CHOICES: &[&str] = &["Breakfast Menu", "Lunch Menu", "Dinner Specials"];

#[component]
pub fn SchedulePage() -> impl IntoView {
    let schedules = RwSignal::new(ScheduleStore::sample());
    let (show_create, set_show_create) = signal(false);

    // form buffers
    let (name, set_name) = signal(String::new());
    let (playlist, set_playlist) = signal(PLAYLIST_CHOICES[0].to_string());
    let (meal_time, set_meal_time) = signal(MealTime::Breakfast);
    let days = RwSignal::new(Vec::<Weekday>::new());
    let (start_time, set_start_time) = signal(String::new());
    let (end_time, set_end_time) = signal(String::new());

    // inline rename state
    let (editing, set_editing) = signal::<Option<String>>(None);
    let (edit_name, set_edit_name) = signal(String::new());

    let toggle_day = move |day: Weekday| {
        days.update(|v| {
            if let Some(i) = v.iter().position(|d| *d == day) {
                v.remove(i);
            } else {
                v.push(day);
            }
        });
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let def = NewSchedule {
            name: name.get(),
            playlist: playlist.get(),
            meal_time: meal_time.get(),
            days: days.get(),
            start_time: start_time.get(),
            end_time: end_time.get(),
        };
        let mut created = false;
        schedules.update(|s| created = s.create(def));
        if created {
            set_name.set(String::new());
            days.set(Vec::new());
            set_start_time.set(String::new());
            set_end_time.set(String::new());
            set_show_create.set(false);
        }
    };

    view! {
        <div class="page schedule-page">
            <div class="page-header">
                <div>
                    <h2>"Schedule"</h2>
                    <p class="page-subtitle">"Set up automatic playlist scheduling based on time and day"</p>
                </div>
                <button class="primary-btn" on:click=move |_| set_show_create.update(|v| *v = !*v)>
                    "Create Schedule"
                </button>
            </div>

            <Show when=move || show_create.get()>
                <form class="card create-form" on:submit=on_create>
                    <div class="card-header">
                        <h3>"Create Schedule"</h3>
                        <p class="card-subtitle">"Define when specific playlists should be displayed"</p>
                    </div>
                    <div class="card-body form-fields">
                        <label>"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Morning Schedule"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <div class="field-pair">
                            <div>
                                <label>"Meal Time"</label>
                                <select
                                    prop:value=move || meal_time.get().as_str()
                                    on:change=move |ev| set_meal_time.set(MealTime::from_str(&event_target_value(&ev)))
                                >
                                    {MealTime::ALL.iter().map(|m| view! {
                                        <option value=m.as_str()>{m.as_str()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div>
                                <label>"Playlist"</label>
                                <select
                                    prop:value=move || playlist.get()
                                    on:change=move |ev| set_playlist.set(event_target_value(&ev))
                                >
                                    {PLAYLIST_CHOICES.iter().map(|p| view! {
                                        <option value=*p>{*p}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="field-pair">
                            <div>
                                <label>"Start Time"</label>
                                <input
                                    type="time"
                                    prop:value=move || start_time.get()
                                    on:input=move |ev| set_start_time.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label>"End Time"</label>
                                <input
                                    type="time"
                                    prop:value=move || end_time.get()
                                    on:input=move |ev| set_end_time.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <label>"Days of Week"</label>
                        <div class="day-row">
                            {Weekday::ALL.iter().map(|d| {
                                let day = *d;
                                let is_on = move || days.with(|v| v.contains(&day));
                                view! {
                                    <button
                                        type="button"
                                        class=move || if is_on() { "day-btn active" } else { "day-btn" }
                                        on:click=move |_| toggle_day(day)
                                    >
                                        {day.as_str()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <button type="submit" class="primary-btn">"Create Schedule"</button>
                    </div>
                </form>
            </Show>

            <div class="card">
                <div class="card-header">
                    <h3>"Active Schedules"</h3>
                    <span class="badge">
                        {move || format!("{} schedules", schedules.with(|s| s.len()))}
                    </span>
                </div>
                <div class="card-body schedule-list">
                    <For
                        each=move || schedules.with(|s| s.schedules().to_vec())
                        key=|schedule| schedule.clone()
                        children=move |schedule| {
                            let sid = schedule.id.clone();
                            let is_editing = {
                                let sid = sid.clone();
                                move || editing.get().as_deref() == Some(sid.as_str())
                            };

                            let start_edit = {
                                let sid = sid.clone();
                                let current = schedule.name.clone();
                                move |_| {
                                    set_edit_name.set(current.clone());
                                    set_editing.set(Some(sid.clone()));
                                }
                            };
                            let save_edit = {
                                let sid = sid.clone();
                                move |ev: web_sys::SubmitEvent| {
                                    ev.prevent_default();
                                    schedules.update(|s| {
                                        s.update(&sid, ScheduleUpdate {
                                            name: Some(edit_name.get()),
                                            ..Default::default()
                                        });
                                    });
                                    set_editing.set(None);
                                }
                            };

                            let remove_sid = sid.clone();
                            let on_remove = Callback::new(move |_| {
                                schedules.update(|s| s.remove(&remove_sid));
                            });

                            view! {
                                <div class="schedule-row">
                                    <div class="schedule-main">
                                        <div class="schedule-title-row">
                                            {move || if is_editing() {
                                                view! {
                                                    <form class="inline-form" on:submit=save_edit.clone()>
                                                        <input
                                                            type="text"
                                                            prop:value=move || edit_name.get()
                                                            on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                                                        />
                                                        <button type="submit">"Save"</button>
                                                    </form>
                                                }.into_any()
                                            } else {
                                                view! {
                                                    <h4>{schedule.name.clone()}</h4>
                                                }.into_any()
                                            }}
                                            <span class="badge">{schedule.meal_time.as_str()}</span>
                                        </div>
                                        <p class="schedule-playlist">{format!("Playlist: {}", schedule.playlist)}</p>
                                        <div class="schedule-meta">
                                            <span class="time-range">
                                                {format!("{} - {}", schedule.start_time, schedule.end_time)}
                                            </span>
                                            <span class="day-badges">
                                                {schedule.days.iter().map(|d| view! {
                                                    <span class="badge secondary">{d.as_str()}</span>
                                                }).collect_view()}
                                            </span>
                                        </div>
                                    </div>
                                    <div class="schedule-actions">
                                        <button type="button" class="ghost-btn" on:click=start_edit>"Edit"</button>
                                        <DeleteConfirmButton button_class="ghost-btn danger" on_confirm=on_remove />
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
