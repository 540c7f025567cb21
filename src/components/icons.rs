//! Icon identifiers and their SVG artwork.
//!
//! Content files name icons in kebab-case (`"graduation-cap"`). Names are
//! parsed into [`Icon`] when the content is loaded, so an unknown name is a
//! parse error rather than a blank glyph.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Every icon the site can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Icon {
	Github,
	Linkedin,
	Twitter,
	Mail,
	Globe,
	Code,
	Briefcase,
	GraduationCap,
	Award,
	ExternalLink,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown icon name: {0:?}")]
pub struct UnknownIcon(pub String);

impl Icon {
	pub const ALL: [Icon; 10] = [
		Icon::Github,
		Icon::Linkedin,
		Icon::Twitter,
		Icon::Mail,
		Icon::Globe,
		Icon::Code,
		Icon::Briefcase,
		Icon::GraduationCap,
		Icon::Award,
		Icon::ExternalLink,
	];

	/// Kebab-case name used in content files.
	pub fn name(self) -> &'static str {
		match self {
			Icon::Github => "github",
			Icon::Linkedin => "linkedin",
			Icon::Twitter => "twitter",
			Icon::Mail => "mail",
			Icon::Globe => "globe",
			Icon::Code => "code",
			Icon::Briefcase => "briefcase",
			Icon::GraduationCap => "graduation-cap",
			Icon::Award => "award",
			Icon::ExternalLink => "external-link",
		}
	}

	/// Accessible label.
	pub fn label(self) -> &'static str {
		match self {
			Icon::Github => "GitHub",
			Icon::Linkedin => "LinkedIn",
			Icon::Twitter => "Twitter",
			Icon::Mail => "Email",
			Icon::Globe => "Website",
			Icon::Code => "Code",
			Icon::Briefcase => "Experience",
			Icon::GraduationCap => "Education",
			Icon::Award => "Certification",
			Icon::ExternalLink => "External link",
		}
	}

	/// Stroke path data for a 24x24 viewBox.
	pub fn svg_path(self) -> &'static str {
		match self {
			Icon::Github => {
				"M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"
			}
			Icon::Linkedin => {
				"M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"
			}
			Icon::Twitter => {
				"M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"
			}
			Icon::Mail => "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6",
			Icon::Globe => {
				"M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
			}
			Icon::Code => "M16 18l6-6-6-6M8 6l-6 6 6 6",
			Icon::Briefcase => {
				"M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"
			}
			Icon::GraduationCap => "M22 10L12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5",
			Icon::Award => "M12 2a7 7 0 1 0 0 14 7 7 0 0 0 0-14zM8.21 13.89L7 23l5-3 5 3-1.21-9.12",
			Icon::ExternalLink => {
				"M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14L21 3"
			}
		}
	}
}

impl fmt::Display for Icon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Icon {
	type Err = UnknownIcon;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Icon::ALL
			.into_iter()
			.find(|icon| icon.name() == s)
			.ok_or_else(|| UnknownIcon(s.to_string()))
	}
}

impl TryFrom<String> for Icon {
	type Error = UnknownIcon;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Inline SVG for an [`Icon`].
#[component]
pub fn IconView(icon: Icon, #[prop(default = 20)] size: u32) -> impl IntoView {
	view! {
		<svg
			class="icon"
			width=size
			height=size
			viewBox="0 0 24 24"
			fill="none"
			stroke="currentColor"
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			role="img"
			aria-label=icon.label()
		>
			<path d=icon.svg_path() />
		</svg>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_round_trip_for_every_icon() {
		for icon in Icon::ALL {
			assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
		}
	}

	#[test]
	fn unknown_names_are_rejected() {
		assert_eq!(
			"GraduationCap".parse::<Icon>(),
			Err(UnknownIcon("GraduationCap".into()))
		);
	}

	#[test]
	fn deserializes_from_content_json() {
		#[derive(Debug, Deserialize)]
		struct Link {
			icon: Icon,
		}

		let link: Link = serde_json::from_str(r#"{ "icon": "graduation-cap" }"#).unwrap();
		assert_eq!(link.icon, Icon::GraduationCap);

		let err = serde_json::from_str::<Link>(r#"{ "icon": "unicorn" }"#).unwrap_err();
		assert!(err.to_string().contains("unknown icon name"));
	}
}
