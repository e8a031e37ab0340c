//! Resource Link Model
//!
//! Campus resource links and the categories they are grouped under.

use serde::Serialize;

/// An external campus resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Ordered category listing member link names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

impl ResourceCategory {
    pub fn contains(&self, link_name: &str) -> bool {
        self.items.contains(&link_name)
    }
}

/// A category with the links selected for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceGroup {
    pub name: &'static str,
    pub items: Vec<ResourceLink>,
}

pub const CATEGORIES: &[ResourceCategory] = &[
    ResourceCategory {
        name: "Social",
        items: &["Discord", "Reddit", "Github"],
    },
    ResourceCategory {
        name: "Apps@",
        items: &["Prof Finder"],
    },
    ResourceCategory {
        name: "Google",
        items: &["Calendar", "Drive"],
    },
    ResourceCategory {
        name: "Featured",
        items: &["Gmail", "Canvas", "Eclass", "Bear Tracks"],
    },
    ResourceCategory {
        name: "Help",
        items: &[
            "Student Service Center",
            "Staff Services Centre",
            "Campus Security",
            "Academic Success",
            "Peer Tutors",
            "Tutor Listing",
        ],
    },
    ResourceCategory {
        name: "Campus",
        items: &[
            "BearsDen",
            "Library",
            "MyCCID",
            "ONECard Account",
            "Student Union",
            "University Map",
            "Events Finder",
            "Careers",
        ],
    },
];

const fn link(name: &'static str, url: &'static str) -> ResourceLink {
    ResourceLink { name, url }
}

pub const LINKS: &[ResourceLink] = &[
    link("Discord", "https://discord.com"),
    link("Reddit", "https://www.reddit.com"),
    link("Github", "https://www.github.com"),
    link("Gmail", "https://apps.ualberta.ca/"),
    link("Eclass", "https://eclass.srv.ualberta.ca/portal/"),
    link("Bear Tracks", "https://www.beartracks.ualberta.ca/"),
    link("Canvas", "https://canvas.ualberta.ca/"),
    link("Library", "https://www.library.ualberta.ca/"),
    link("Prof Finder", "https://apps.ualberta.ca/directory"),
    link("Events Finder", "https://www.ualberta.ca/events/index.html"),
    link("University Map", "https://www.ualberta.ca/maps.html"),
    link("Careers", "https://www.ualberta.ca/en/careers.html"),
    link("Student Union", "https://www.su.ualberta.ca/"),
    link(
        "Academic Success",
        "https://www.ualberta.ca/en/campus-life/academic-success/index.html",
    ),
    link("BearsDen", "https://alberta.campuslabs.ca/engage/"),
    link("Calendar", "https://calendar.google.com/a/ualberta.ca/"),
    link("Drive", "https://drive.google.com/a/ualberta.ca/"),
    link(
        "Student Service Center",
        "https://www.ualberta.ca/en/services/student-service-centre/index.html",
    ),
    link(
        "Staff Services Centre",
        "https://www.ualberta.ca/en/services/staff-service-centre/index.html",
    ),
    link(
        "Campus Security",
        "https://www.ualberta.ca/en/campus-life/campus-security.html",
    ),
    link("ONECard Account", "https://www.ualberta.ca/en/onecard/index.html"),
    link("MyCCID", "https://myccid.ualberta.ca/"),
    link(
        "Peer Tutors",
        "https://www.ualberta.ca/en/residence/community-life/academic-support/peer-tutors.html",
    ),
    link(
        "Tutor Listing",
        "https://www2.su.ualberta.ca/services/infolink/tutor/registry/browse/2/",
    ),
];
