//! Static informational pages.

/// A titled block of paragraphs or list items.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

/// A static page shown next to the generator.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [Section],
}

impl Page {
    /// Render the page as plain text for terminal output.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push('\n');
        out.push_str(self.tagline);
        out.push('\n');

        for section in self.sections {
            out.push('\n');
            out.push_str(section.heading);
            out.push('\n');
            out.push_str(&"-".repeat(section.heading.chars().count()));
            out.push('\n');
            for line in section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        out
    }
}

pub const HOME: Page = Page {
    title: "AI Apology Generator",
    tagline: "Generate sincere, heartfelt apologies in seconds.",
    sections: &[
        Section {
            heading: "What it does",
            lines: &[
                "Describe the situation and what you are apologizing for. The generator",
                "writes a genuine, empathetic apology of 100-300 words that takes",
                "responsibility and offers a way forward.",
            ],
        },
        Section {
            heading: "Perfect for",
            lines: &[
                "- Professional apologies to clients",
                "- Personal relationship reconciliation",
                "- Business communication",
                "- Customer service responses",
                "- Team communication",
            ],
        },
        Section {
            heading: "Tips for effective apologies",
            lines: &[
                "1. Be specific about what you're apologizing for",
                "2. Take responsibility for your actions",
                "3. Express genuine remorse",
                "4. Offer a solution or way forward",
                "5. Make a commitment to change",
            ],
        },
    ],
};

pub const ABOUT: Page = Page {
    title: "About",
    tagline: "Empowering sincere communication through AI-driven apologies.",
    sections: &[
        Section {
            heading: "Our Mission",
            lines: &[
                "Making sincere apology writing accessible to everyone, helping restore",
                "relationships and trust.",
            ],
        },
        Section {
            heading: "Our Values",
            lines: &[
                "We believe in authenticity, empathy, and making powerful communication",
                "tools accessible to everyone.",
            ],
        },
        Section {
            heading: "How It Works",
            lines: &[
                "Your description is sent to a hosted language model together with a",
                "fixed instruction asking for a sincere, professional apology. The text",
                "that comes back is shown as-is and can be copied with one key.",
            ],
        },
        Section {
            heading: "Our Commitment",
            lines: &[
                "A reliable, user-friendly tool that helps people craft genuine",
                "apologies. Nothing you type is stored.",
            ],
        },
    ],
};
