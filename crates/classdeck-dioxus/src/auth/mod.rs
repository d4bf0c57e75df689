//! Teacher classifiers shared between components.

use classdeck_core::{
    auth::{TeacherClassifier, TeacherRoster},
    state::State,
};
use std::{fmt, sync::Arc};

/// A cheaply cloneable teacher classifier which can be passed as a component prop.
///
/// Two instances are equal when they share the same classifier.
#[derive(Clone)]
pub struct SharedClassifier(Arc<dyn TeacherClassifier + Send + Sync>);

impl SharedClassifier {
    /// Creates a new instance.
    #[inline]
    pub fn new<C>(classifier: C) -> Self
    where
        C: TeacherClassifier + Send + Sync + 'static,
    {
        Self(Arc::new(classifier))
    }

    /// Creates a new instance backed by the teacher roster of the state.
    #[inline]
    pub fn from_state(state: &State) -> Self {
        Self::new(TeacherRoster::from_state(state))
    }
}

impl Default for SharedClassifier {
    /// A classifier which treats every user as a student.
    #[inline]
    fn default() -> Self {
        Self::new(TeacherRoster::default())
    }
}

impl TeacherClassifier for SharedClassifier {
    #[inline]
    fn is_teacher(&self, user_id: Option<&str>) -> bool {
        self.0.is_teacher(user_id)
    }
}

impl PartialEq for SharedClassifier {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedClassifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedClassifier;
    use classdeck_core::{
        auth::{TeacherClassifier, TeacherRoster},
        state::{Env, State},
    };

    #[test]
    fn it_compares_by_identity() {
        let classifier = SharedClassifier::new(TeacherRoster::new(["u1"]));
        let cloned = classifier.clone();
        assert_eq!(classifier, cloned);
        assert!(cloned.is_teacher(Some("u1")));

        let other = SharedClassifier::new(TeacherRoster::new(["u1"]));
        assert_ne!(classifier, other);
        assert!(!SharedClassifier::default().is_teacher(Some("u1")));
    }

    #[test]
    fn it_loads_roster_from_state() {
        let config = "[teacher]\nuser-ids = [\"u9\"]\n".parse().unwrap();
        let state = State::with_config(Env::Prod, config);
        let classifier = SharedClassifier::from_state(&state);
        assert!(classifier.is_teacher(Some("u9")));
    }

    #[test]
    fn it_wraps_closures() {
        let classifier = SharedClassifier::new(|user_id: &str| user_id.ends_with("_teacher"));
        assert!(classifier.is_teacher(Some("ann_teacher")));
        assert!(!classifier.is_teacher(None));
    }
}
