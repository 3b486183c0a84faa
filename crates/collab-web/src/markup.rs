#![forbid(unsafe_code)]

//! HTML for the student and project card grids.
//!
//! Cards are produced once at startup and assigned to the grid's
//! `innerHTML`. Every record field is escaped. Each card carries its list
//! position in `data-index` so a single delegated click listener on the grid
//! can map a click back to the record, and project cards carry their
//! category in `data-category`.

use std::borrow::Cow;
use std::fmt::Write as _;

use collab_core::catalog::{Project, Student};

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Staggered entrance delay of the card at `index`, in seconds.
fn animation_delay(index: usize) -> String {
    // 0.1s steps, printed without float noise.
    format!("{}.{}s", index / 10, index % 10)
}

/// Markup of one student card.
#[must_use]
pub fn student_card(index: usize, student: &Student) -> String {
    let mut html = String::with_capacity(1_024);
    let _ = write!(
        html,
        r#"<div class="student-card premium-card" data-index="{index}" style="animation-delay: {delay}">
    <div class="flex items-center mb-4">
        <div class="avatar">{avatar}</div>
        <div>
            <h3 class="font-bold text-lg student-name">{name}</h3>
            <p class="student-role">{role}</p>
            <div class="flex items-center mt-1">
                <span class="material-symbols-outlined text-sm">location_on</span>
                <span class="text-xs ml-1">{location}</span>
            </div>
        </div>
    </div>
    <div class="mb-3">
        <div class="field-label">Skills</div>
        <div class="student-skills">{skills}</div>
    </div>
    <div class="mb-3">
        <div class="field-label">College</div>
        <div class="student-college">{college}</div>
    </div>
    <div class="mb-3">
        <div class="field-label">Experience</div>
        <div class="text-sm">{experience}</div>
    </div>
    <p class="text-sm mb-4 line-clamp-2">{bio}</p>
    <div class="card-footer">
        <div class="flex items-center">
            <span class="material-symbols-outlined text-sm">star</span>
            <span class="ml-1 text-sm font-bold">{rating:.1}</span>
            <span class="text-xs ml-2">({projects} projects)</span>
        </div>
        <button class="btn btn-primary btn-small">View Profile</button>
    </div>
</div>
"#,
        delay = animation_delay(index),
        avatar = escape(student.avatar),
        name = escape(student.name),
        role = escape(student.role),
        location = escape(student.location),
        skills = escape(student.skills),
        college = escape(student.college),
        experience = escape(student.experience),
        bio = escape(student.bio),
        rating = student.rating,
        projects = student.projects,
    );
    html
}

/// Markup of one project card.
#[must_use]
pub fn project_card(index: usize, project: &Project) -> String {
    let chips = project
        .skill_chips()
        .map(|skill| format!(r#"<span class="skill-chip">{}</span>"#, escape(skill)))
        .collect::<Vec<_>>()
        .join("");
    let mut html = String::with_capacity(1_536);
    let _ = write!(
        html,
        r#"<div class="project-card premium-card" data-index="{index}" data-category="{category}" style="animation-delay: {delay}">
    <div class="flex justify-between items-start mb-4">
        <h3 class="font-bold text-lg project-title">{title}</h3>
        <div class="flex flex-col items-end">
            <span class="category-badge">{category}</span>
            <div class="flex items-center text-xs">
                <span class="material-symbols-outlined text-sm mr-1">business</span>
                {company}
            </div>
        </div>
    </div>
    <p class="mb-4 leading-relaxed">{description}</p>
    <div class="mb-4">
        <div class="field-label">Required Skills</div>
        <div class="flex flex-wrap gap-2">{chips}</div>
    </div>
    <div class="grid grid-cols-2 gap-4 mb-4">
        <div>
            <div class="field-label">Duration</div>
            <div class="text-sm">{duration}</div>
        </div>
        <div>
            <div class="field-label">Location</div>
            <div class="text-sm">{location}</div>
        </div>
    </div>
    <div class="card-footer">
        <div>
            <div class="field-label">Budget</div>
            <div class="font-bold text-lg budget">{budget}</div>
        </div>
        <div class="text-right">
            <div class="flex items-center text-sm mb-2">
                <span class="material-symbols-outlined text-sm mr-1">schedule</span>
                {posted}
            </div>
            <button class="btn btn-primary btn-small">Apply Now</button>
        </div>
    </div>
</div>
"#,
        delay = animation_delay(index),
        category = escape(project.category),
        title = escape(project.title),
        company = escape(project.company),
        description = escape(project.description),
        duration = escape(project.duration),
        location = escape(project.location),
        budget = escape(project.budget),
        posted = escape(project.posted),
    );
    html
}

/// Markup of the whole student grid, in roster order.
#[must_use]
pub fn student_grid(students: &[Student]) -> String {
    students
        .iter()
        .enumerate()
        .map(|(i, s)| student_card(i, s))
        .collect()
}

/// Markup of the whole project grid, in listing order.
#[must_use]
pub fn project_grid(projects: &[Project]) -> String {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(i, p))
        .collect()
}

/// Parse a card's `data-index` attribute.
#[must_use]
pub fn parse_card_index(attr: Option<&str>) -> Option<usize> {
    attr?.trim().parse().ok()
}
