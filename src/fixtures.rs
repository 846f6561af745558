use chrono::NaiveDate;

use crate::models::{Service, StaffMember, TimeSlot};

/// Staff and services shown on the page and offered in the booking form.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub staff: Vec<StaffMember>,
    pub services: Vec<Service>,
}

fn staff(id: u32, name: &str, specialization: &str, phone: &str, email: &str) -> StaffMember {
    StaffMember {
        id,
        name: name.to_string(),
        specialization: specialization.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

fn service(id: u32, name: &str, description: &str, duration_minutes: u32, price: u32) -> Service {
    Service {
        id,
        name: name.to_string(),
        description: description.to_string(),
        duration_minutes,
        price,
    }
}

impl Catalog {
    pub fn fixture() -> Self {
        Self {
            staff: vec![
                staff(1, "Anna Smirnova", "Stylist", "+7 (999) 123-45-67", "anna@salon.ru"),
                staff(2, "Maria Petrova", "Colorist", "+7 (999) 234-56-78", "maria@salon.ru"),
                staff(3, "Ekaterina Ivanova", "Barber", "+7 (999) 345-67-89", "kate@salon.ru"),
            ],
            services: vec![
                service(1, "Women's haircut", "A haircut of any complexity", 60, 1500),
                service(2, "Men's haircut", "Classic men's haircut", 45, 1000),
                service(3, "Coloring", "Hair coloring with professional dyes", 120, 3500),
                service(4, "Styling", "Professional hair styling", 30, 800),
                service(5, "Beard trim", "Beard shaping and care", 30, 700),
                service(6, "Haircut + styling", "Women's haircut with styling", 90, 2000),
            ],
        }
    }

    pub fn service(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn staff_member(&self, id: u32) -> Option<&StaffMember> {
        self.staff.iter().find(|m| m.id == id)
    }
}

/// What a slot lookup may depend on. The static provider ignores all of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotQuery {
    pub date: Option<NaiveDate>,
    pub staff_id: Option<u32>,
    pub service_id: Option<u32>,
}

pub trait AvailabilityProvider: Send + Sync {
    /// All slots for the query, in display order, each flagged available or not.
    fn slots(&self, query: &SlotQuery) -> Vec<TimeSlot>;

    fn is_selectable(&self, query: &SlotQuery, time: &str) -> bool {
        self.slots(query)
            .iter()
            .any(|slot| slot.available && slot.time == time)
    }
}

/// The same ten hourly slots for every date, staff member and service.
#[derive(Debug, Clone)]
pub struct StaticAvailability {
    slots: Vec<TimeSlot>,
}

impl Default for StaticAvailability {
    fn default() -> Self {
        let pattern = [
            ("09:00", true),
            ("10:00", true),
            ("11:00", false),
            ("12:00", true),
            ("13:00", true),
            ("14:00", true),
            ("15:00", false),
            ("16:00", true),
            ("17:00", true),
            ("18:00", true),
        ];
        Self {
            slots: pattern
                .iter()
                .map(|(time, available)| TimeSlot {
                    time: time.to_string(),
                    available: *available,
                })
                .collect(),
        }
    }
}

impl AvailabilityProvider for StaticAvailability {
    fn slots(&self, _query: &SlotQuery) -> Vec<TimeSlot> {
        self.slots.clone()
    }
}
