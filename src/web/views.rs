use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::booking::{BookingForm, Notification, Severity};
use crate::fixtures::Catalog;
use crate::models::{SalonConfig, Service, StaffMember, TimeSlot};

const STYLE: &str = include_str!("../style.css");

pub(super) struct PageData<'a> {
    pub(super) salon: &'a SalonConfig,
    pub(super) catalog: &'a Catalog,
    pub(super) slots: &'a [TimeSlot],
    pub(super) form: &'a BookingForm,
    pub(super) notifications: &'a [Notification],
    pub(super) today: NaiveDate,
}

pub(super) fn render_page(data: &PageData) -> String {
    let title = data.salon.name.clone();
    let nav_html = render_nav(&data.salon.name);
    let toasts_html = render_toasts(data.notifications);
    let dialog_html = if data.form.is_open() {
        render_dialog(data)
    } else {
        String::new()
    };
    let hero_html = render_hero(data.catalog);
    let services_html = render_services(&data.catalog.services);
    let staff_html = render_staff(&data.catalog.staff);
    let contacts_html = render_contacts(data.salon);
    let footer = format!(
        "© {} {}. All rights reserved.",
        data.today.year(),
        data.salon.name
    );

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <div inner_html=nav_html />
                <div inner_html=toasts_html />
                <div inner_html=dialog_html />
                <main>
                    <div inner_html=hero_html />
                    <div inner_html=services_html />
                    <div inner_html=staff_html />
                    <div inner_html=contacts_html />
                </main>
                <footer>
                    <p>{footer}</p>
                </footer>
            </body>
        </html>
    }
    .to_html()
}

fn render_nav(salon_name: &str) -> String {
    let name = salon_name.to_string();
    view! {
        <nav class="topbar">
            <div class="container topbar-inner">
                <a class="brand" href="#home">"✂ " {name}</a>
                <div class="nav-links">
                    <a href="#home">"Home"</a>
                    <a href="#services">"Services"</a>
                    <a href="#staff">"Stylists"</a>
                    <a href="#contacts">"Contacts"</a>
                </div>
                <a class="button" href="/booking">"Book now"</a>
            </div>
        </nav>
    }
    .to_html()
}

fn render_toasts(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return String::new();
    }

    let items_html: String = notifications
        .iter()
        .map(|n| {
            let css = match n.severity {
                Severity::Normal => "toast",
                Severity::Error => "toast toast-error",
            };
            let title = n.title.clone();
            let message = n.message.clone();
            view! {
                <div class=css role="status">
                    <strong>{title}</strong>
                    <p>{message}</p>
                </div>
            }
            .to_html()
        })
        .collect();

    view! { <div class="toasts" inner_html=items_html /> }.to_html()
}

fn render_hero(catalog: &Catalog) -> String {
    let stats = [
        ("500+".to_string(), "Happy clients"),
        (catalog.staff.len().to_string(), "Stylists"),
        ("15+".to_string(), "Services"),
        ("5".to_string(), "Years of experience"),
    ];
    let stats_html: String = stats
        .into_iter()
        .map(|(value, label)| {
            view! {
                <div class="card stat">
                    <div class="stat-value">{value}</div>
                    <div class="muted">{label}</div>
                </div>
            }
            .to_html()
        })
        .collect();

    view! {
        <section id="home" class="hero">
            <div class="container hero-inner">
                <div class="hero-text">
                    <h1>"Beauty starts here"</h1>
                    <p class="lead">
                        "Professional hairdressing from the best stylists in town. "
                        "Book online in two minutes."
                    </p>
                    <div class="actions">
                        <a class="button button-lg" href="/booking">"Book online"</a>
                        <a class="button button-lg button-outline" href="#services">"Our services"</a>
                    </div>
                </div>
                <div class="stats" inner_html=stats_html />
            </div>
        </section>
    }
    .to_html()
}

fn render_services(services: &[Service]) -> String {
    let cards_html: String = services
        .iter()
        .map(|s| {
            let name = s.name.clone();
            let description = s.description.clone();
            let duration = format!("{} min", s.duration_minutes);
            let price = format!("{} ₽", s.price);
            view! {
                <div class="card">
                    <h3>{name}</h3>
                    <p class="muted">{description}</p>
                    <div class="card-footer">
                        <span class="muted">"⏱ " {duration}</span>
                        <span class="price">{price}</span>
                    </div>
                </div>
            }
            .to_html()
        })
        .collect();

    view! {
        <section id="services" class="band">
            <div class="container">
                <h2>"Our services"</h2>
                <p class="muted center">"A wide range of professional services for your beauty"</p>
                <div class="grid grid-3" inner_html=cards_html />
            </div>
        </section>
    }
    .to_html()
}

fn render_staff(staff: &[StaffMember]) -> String {
    let cards_html: String = staff
        .iter()
        .map(|m| {
            let name = m.name.clone();
            let specialization = m.specialization.clone();
            let phone = m.phone.clone();
            let email = m.email.clone();
            view! {
                <div class="card center">
                    <div class="avatar">"👤"</div>
                    <h3>{name}</h3>
                    <span class="badge">{specialization}</span>
                    <p class="muted">"☎ " {phone}</p>
                    <p class="muted">"✉ " {email}</p>
                </div>
            }
            .to_html()
        })
        .collect();

    view! {
        <section id="staff">
            <div class="container">
                <h2>"Our stylists"</h2>
                <p class="muted center">"Professionals with years of experience"</p>
                <div class="grid grid-3" inner_html=cards_html />
            </div>
        </section>
    }
    .to_html()
}

fn render_contacts(salon: &SalonConfig) -> String {
    let address = salon.address.clone();
    let phone = salon.phone.clone();
    let hours = salon.hours.clone();
    view! {
        <section id="contacts" class="band">
            <div class="container">
                <h2>"Contacts"</h2>
                <p class="muted center">"We are always glad to see you"</p>
                <div class="grid grid-3">
                    <div class="card center">
                        <h3>"Address"</h3>
                        <p class="muted">{address}</p>
                    </div>
                    <div class="card center">
                        <h3>"Phone"</h3>
                        <p class="muted">{phone}</p>
                    </div>
                    <div class="card center">
                        <h3>"Opening hours"</h3>
                        <p class="muted">{hours}</p>
                    </div>
                </div>
            </div>
        </section>
    }
    .to_html()
}

/// How one time slot is offered in the dialog.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct SlotControl {
    pub(super) time: String,
    pub(super) disabled: bool,
    pub(super) checked: bool,
}

/// Unavailable slots are disabled so they can never be picked.
pub(super) fn slot_controls(slots: &[TimeSlot], selected: Option<&str>) -> Vec<SlotControl> {
    slots
        .iter()
        .map(|slot| SlotControl {
            time: slot.time.clone(),
            disabled: !slot.available,
            checked: slot.available && selected == Some(slot.time.as_str()),
        })
        .collect()
}

fn render_slots(slots: &[TimeSlot], selected: Option<&str>) -> String {
    slot_controls(slots, selected)
        .into_iter()
        .map(|c| {
            let (css, title) = if c.disabled {
                ("slot slot-unavailable", format!("{} unavailable", c.time))
            } else {
                ("slot", c.time.clone())
            };
            let value = c.time.clone();
            let text = c.time;
            let checked = c.checked;
            let disabled = c.disabled;
            view! {
                <label class=css title=title>
                    <input type="radio" name="time" value=value checked=checked disabled=disabled />
                    <span>{text}</span>
                </label>
            }
            .to_html()
        })
        .collect()
}

fn render_select_options<T>(
    items: &[T],
    placeholder: &str,
    selected: Option<u32>,
    option: impl Fn(&T) -> (u32, String),
) -> String {
    let placeholder = placeholder.to_string();
    let mut html = view! { <option value="">{placeholder}</option> }.to_html();
    for item in items {
        let (id, label) = option(item);
        let value = id.to_string();
        let is_selected = selected == Some(id);
        html.push_str(
            &view! { <option value=value selected=is_selected>{label}</option> }.to_html(),
        );
    }
    html
}

fn render_dialog(data: &PageData) -> String {
    let selection = &data.form.selection;

    let service_options = render_select_options(
        &data.catalog.services,
        "Choose a service",
        selection.service_id(),
        |s| (s.id, format!("{} - {} ₽", s.name, s.price)),
    );
    let staff_options = render_select_options(
        &data.catalog.staff,
        "Choose a stylist",
        selection.staff_id(),
        |m| (m.id, format!("{} - {}", m.name, m.specialization)),
    );
    let slots_html = render_slots(data.slots, selection.time());
    let date_value = selection
        .date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let name = selection.client_name().to_string();
    let phone = selection.client_phone().to_string();

    view! {
        <div class="dialog-backdrop">
            <div class="dialog" id="booking-dialog" role="dialog" aria-labelledby="booking-title">
                <div class="dialog-header">
                    <div>
                        <h2 id="booking-title">"Online booking"</h2>
                        <p class="muted">"Choose a stylist, a service and a convenient time"</p>
                    </div>
                    <form method="post" action="/booking/close">
                        <button type="submit" class="close" aria-label="Close">"×"</button>
                    </form>
                </div>
                <form method="post" action="/booking" class="booking-form">
                    <label for="service-select">"Service"</label>
                    <select id="service-select" name="service_id" inner_html=service_options />

                    <label for="staff-select">"Stylist"</label>
                    <select id="staff-select" name="staff_id" inner_html=staff_options />

                    <label for="date">"Date"</label>
                    <input id="date" type="date" name="date" value=date_value />

                    <span class="label">"Time"</span>
                    <div class="slots" inner_html=slots_html />

                    <label for="name">"Your name"</label>
                    <input id="name" type="text" name="client_name" value=name placeholder="Ivan Ivanov" />

                    <label for="phone">"Phone"</label>
                    <input id="phone" type="tel" name="client_phone" value=phone placeholder="+7 (999) 123-45-67" />

                    <button type="submit" class="button button-lg">"Confirm booking"</button>
                </form>
            </div>
        </div>
    }
    .to_html()
}
