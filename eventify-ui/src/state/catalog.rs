//! Event Catalog
//!
//! The events on offer are compiled in; nothing is fetched.

/// A bookable event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub city: &'static str,
    pub date: &'static str,
    /// Ticket price in rupees
    pub price: u32,
    pub image: &'static str,
}

impl Event {
    pub fn total(&self, quantity: u8) -> u32 {
        self.price * u32::from(quantity)
    }
}

pub const EVENTS: [Event; 5] = [
    Event {
        id: 1,
        title: "Art Exhibition",
        city: "Delhi",
        date: "2026-01-25",
        price: 499,
        image: "https://images.unsplash.com/photo-1545235617-9465d2a55698",
    },
    Event {
        id: 2,
        title: "Music Concert",
        city: "Mumbai",
        date: "2026-02-10",
        price: 999,
        image: "https://images.unsplash.com/photo-1507874457470-272b3c8d8ee2",
    },
    Event {
        id: 3,
        title: "Tech Conference",
        city: "Bangalore",
        date: "2026-03-05",
        price: 1999,
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475",
    },
    Event {
        id: 4,
        title: "Startup Meetup",
        city: "Pune",
        date: "2026-02-18",
        price: 299,
        image: "https://images.unsplash.com/photo-1521737604893-d14cc237f11d",
    },
    Event {
        id: 5,
        title: "Food Carnival",
        city: "Goa",
        date: "2026-01-30",
        price: 399,
        image: "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0",
    },
];
