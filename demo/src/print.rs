//! Plain-text rendering of replies, conversations, and portal data.

use carevault_assistant::format::{classify_body, strip_bold, LineKind};
use carevault_contracts::{chat::Sender, navigation::Section, portal::StatusFilter};
use carevault_core::Conversation;
use carevault_portals::{mock_data, search_reports};

/// Print a reply body with headings underlined and bullets indented.
pub fn body(text: &str) {
    for line in classify_body(text) {
        match line {
            LineKind::Heading(h) => {
                println!("{}", h);
                println!("{}", "-".repeat(h.chars().count()));
            }
            LineKind::Bullet(b) => println!("    {}", b),
            LineKind::Callout(c) => println!("  {}", strip_bold(c)),
            LineKind::Success(s) | LineKind::Text(s) => println!("{}", strip_bold(s)),
            LineKind::Blank => println!(),
        }
    }
}

pub fn conversation(conversation: &Conversation) {
    for message in conversation.messages() {
        let time = message.timestamp.format("%H:%M:%S");
        match message.sender {
            Sender::User => println!("[{}] You: {}", time, message.text),
            Sender::Assistant => {
                let tag = message.category.map(|c| c.label()).unwrap_or("general");
                println!("[{}] AI Medical Assistant ({}):", time, tag);
                body(&message.text);
            }
        }
        println!();
    }
}

pub fn portal(section: Section, query: &str, filter: StatusFilter) {
    println!();
    println!("{}", section.label());
    println!("{}", "=".repeat(section.label().len()));
    println!();

    match section {
        Section::Home => home(),
        Section::Hospital => hospital(query, filter),
        Section::Patient => patient(),
        Section::Feedback => feedback(),
        Section::Chatbot => {
            println!("Use `demo ask <question>` or `demo quick` to talk to the assistant.");
        }
    }
    println!();
}

fn home() {
    println!("{}", mock_data::HERO_TITLE);
    println!("{}", mock_data::HERO_TAGLINE);
    println!();
    for card in mock_data::feature_cards() {
        println!("  * {}", card.title);
        println!("    {}", card.description);
    }
}

fn hospital(query: &str, filter: StatusFilter) {
    for stat in mock_data::hospital_stats() {
        println!("  {:<16} {}", stat.label, stat.value);
    }
    println!();

    let reports = mock_data::hospital_reports();
    let hits = search_reports(&reports, query, filter);
    println!(
        "Reports (query: {:?}, filter: {}) — {} of {}",
        query,
        filter.label(),
        hits.len(),
        reports.len()
    );
    println!(
        "  {:<14}{:<12}{:<15}{:<12}{:<12}{}",
        "Report ID", "Patient ID", "Patient", "Type", "Date", "Status"
    );
    for r in hits {
        println!(
            "  {:<14}{:<12}{:<15}{:<12}{:<12}{}",
            r.id,
            r.patient_id,
            r.patient_name,
            r.report_type,
            r.date,
            r.status.label()
        );
    }
}

fn patient() {
    let profile = mock_data::patient_profile();
    println!("  Patient ID:     {}", profile.id);
    println!("  Name:           {}", profile.name);
    println!("  Phone:          {}", profile.phone);
    println!("  Email:          {}", profile.email);
    println!("  Date of birth:  {}", profile.date_of_birth);
    println!();

    for r in mock_data::patient_reports() {
        let urgent = if r.urgent { "  [URGENT]" } else { "" };
        println!("  {}  {} — {} ({}) {}{}", r.id, r.report_type, r.hospital, r.date, r.status, urgent);
    }
    println!();
    println!("  {}", mock_data::SECURITY_NOTICE);
}

fn feedback() {
    for f in mock_data::feedback_history() {
        println!(
            "  Feedback #{}  {}  {}",
            f.display_number(),
            f.status.label(),
            stars(f.rating)
        );
        println!("    {} / {} — {}", f.hospital, f.doctor, f.kind);
        println!("    {}", f.summary);
        println!("    Status updated on {}", f.date);
    }
    println!();
    for stat in mock_data::feedback_impact() {
        println!("  {:<22} {}", stat.label, stat.value);
    }
}

/// Five stars, filled up to `rating`.
pub fn stars(rating: u8) -> String {
    (1..=5u8).map(|i| if i <= rating { '★' } else { '☆' }).collect()
}
