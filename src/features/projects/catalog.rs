//! The projects shown on the page, in display order. Edit this list to add or
//! reorder tiles; `validate` is run by the test suite so a duplicate title or a
//! malformed link fails the build's tests instead of reaching the page.

use super::ProjectDescriptor;
use crate::errors::AppError;
use std::collections::HashSet;
use url::Url;

pub const PROJECTS: &[ProjectDescriptor] = &[
    ProjectDescriptor {
        title: "One Ting",
        url: "https://oneting.netlify.app/",
        tagline: "A simple one-thing focus tool.",
        tags: &["Web", "Minimal"],
        preview: "",
    },
    ProjectDescriptor {
        title: "StudyDot",
        url: "https://studydot.netlify.app/",
        tagline: "Minimal study app for focus: timer + tasks.",
        tags: &["React", "UI", "Productivity"],
        preview: "",
    },
    ProjectDescriptor {
        title: "Wishlist Mini",
        url: "https://wishlistmini.netlify.app/",
        tagline: "Local wishlist with quick add/remove and confetti.",
        tags: &["Vanilla JS", "LocalStorage"],
        preview: "",
    },
    ProjectDescriptor {
        title: "KeepGoing",
        url: "https://keepgoing8.netlify.app/",
        tagline: "Tiny motivation app.",
        tags: &["React", "Framer"],
        preview: "",
    },
];

/// Checks catalog data: non-empty unique titles and absolute http(s) links.
pub fn validate(projects: &[ProjectDescriptor]) -> Result<(), AppError> {
    let mut titles = HashSet::new();
    for project in projects {
        if project.title.trim().is_empty() {
            return Err(AppError::Content(format!(
                "project with url {} has an empty title",
                project.url
            )));
        }
        if !titles.insert(project.title) {
            return Err(AppError::Content(format!(
                "duplicate project title: {}",
                project.title
            )));
        }
        validate_url(project)?;
    }
    Ok(())
}

fn validate_url(project: &ProjectDescriptor) -> Result<(), AppError> {
    let url = Url::parse(project.url).map_err(|err| {
        AppError::Content(format!("{}: invalid url {:?}: {err}", project.title, project.url))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::Content(format!(
            "{}: unsupported url scheme {scheme}",
            project.title
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, PROJECTS};
    use crate::errors::AppError;
    use crate::features::projects::ProjectDescriptor;

    const SAMPLE: ProjectDescriptor = ProjectDescriptor {
        title: "A",
        url: "https://a.example/",
        tagline: "First.",
        tags: &[],
        preview: "",
    };

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate(PROJECTS), Ok(()));
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(PROJECTS[0].title, "One Ting");
    }

    #[test]
    fn duplicate_titles_are_reported() {
        let projects = [SAMPLE, ProjectDescriptor {
            url: "https://other.example/",
            ..SAMPLE
        }];
        assert_eq!(
            validate(&projects),
            Err(AppError::Content("duplicate project title: A".to_string()))
        );
    }

    #[test]
    fn relative_and_non_http_urls_are_reported() {
        let relative = ProjectDescriptor {
            url: "/projects/a",
            ..SAMPLE
        };
        assert!(validate(&[relative]).is_err());

        let script = ProjectDescriptor {
            url: "javascript:alert(1)",
            ..SAMPLE
        };
        assert!(validate(&[script]).is_err());
    }

    #[test]
    fn empty_title_is_reported() {
        let untitled = ProjectDescriptor {
            title: " ",
            ..SAMPLE
        };
        assert!(validate(&[untitled]).is_err());
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert_eq!(validate(&[]), Ok(()));
    }
}
