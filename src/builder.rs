/// Create a version string from its separate parts using the builder pattern.
///
/// The result has the form `epoch:upstream-revision`. The epoch prefix is left out when no epoch
/// (or an empty one) was given. The revision suffix is left out when no revision was given, or
/// when it is empty or `"0"`, which dpkg treats as "no revision".
///
/// ```
/// use vercomp::VersionBuilder;
///
/// let version = VersionBuilder::new("1.0").revision("2").epoch("5").build();
/// assert_eq!("5:1.0-2", version);
///
/// let version = VersionBuilder::new("1.0").revision("0").build();
/// assert_eq!("1.0", version);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VersionBuilder<'a> {
    upstream: &'a str,
    revision: Option<&'a str>,
    epoch: Option<&'a str>,
}

impl<'a> VersionBuilder<'a> {
    pub fn new(upstream: &'a str) -> Self {
        VersionBuilder {
            upstream,
            ..Default::default()
        }
    }

    /// A builder with the revision and epoch set when given
    pub fn from_parts(upstream: &'a str, revision: Option<&'a str>, epoch: Option<&'a str>) -> Self {
        VersionBuilder {
            upstream,
            revision,
            epoch,
        }
    }

    pub fn revision(mut self, revision: &'a str) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn epoch(mut self, epoch: &'a str) -> Self {
        self.epoch = Some(epoch);
        self
    }

    pub fn build(&self) -> String {
        let epoch = self.epoch.filter(|e| !e.is_empty());
        let revision = self.revision.filter(|r| !r.is_empty() && *r != "0");

        let mut version = String::with_capacity(
            self.upstream.len()
                + epoch.map_or(0, |e| e.len() + 1)
                + revision.map_or(0, |r| r.len() + 1),
        );
        if let Some(epoch) = epoch {
            version.push_str(epoch);
            version.push(':');
        }
        version.push_str(self.upstream);
        if let Some(revision) = revision {
            version.push('-');
            version.push_str(revision);
        }
        version
    }
}

/// Build a version string from optional parts. A missing upstream version gives `None`.
pub fn build_version(
    upstream: Option<&str>,
    revision: Option<&str>,
    epoch: Option<&str>,
) -> Option<String> {
    Some(VersionBuilder::from_parts(upstream?, revision, epoch).build())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_version_builder() {
        assert_eq!("1.0", VersionBuilder::new("1.0").build());
        assert_eq!("1.0-3", VersionBuilder::new("1.0").revision("3").build());
        assert_eq!("2:1.0", VersionBuilder::new("1.0").epoch("2").build());
        assert_eq!(
            "2:1.0-3ubuntu1",
            VersionBuilder::new("1.0").epoch("2").revision("3ubuntu1").build()
        );

        // "0" and "" both mean no revision
        assert_eq!("1.0", VersionBuilder::new("1.0").revision("0").build());
        assert_eq!("1.0", VersionBuilder::new("1.0").revision("").build());
        assert_eq!("1.0-00", VersionBuilder::new("1.0").revision("00").build());

        // an empty epoch is dropped but a zero one is kept
        assert_eq!("1.0", VersionBuilder::new("1.0").epoch("").build());
        assert_eq!("0:1.0", VersionBuilder::new("1.0").epoch("0").build());
    }

    #[test]
    fn test_build_version() {
        assert_eq!(Some("1.0".to_string()), build_version(Some("1.0"), Some("0"), None));
        assert_eq!(
            Some("5:1.0-2".to_string()),
            build_version(Some("1.0"), Some("2"), Some("5"))
        );
        assert_eq!(Some("".to_string()), build_version(Some(""), None, None));
        assert_eq!(None, build_version(None, Some("2"), Some("5")));
        assert_eq!(None, build_version(None, None, None));
    }
}
