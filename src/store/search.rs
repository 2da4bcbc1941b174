use super::ConversationStore;
use crate::models::Conversation;

/// Whether `query` occurs in the conversation's concatenated assistant text.
/// Case-sensitive; the empty query matches everything.
fn matches(conversation: &Conversation, query: &str) -> bool {
    query.is_empty() || conversation.assistant_text().contains(query)
}

/// Conversations whose assistant turns contain `query`, in store order
pub fn search<'a>(store: &'a ConversationStore, query: &str) -> Vec<&'a Conversation> {
    store.iter().filter(|c| matches(c, query)).collect()
}

/// Store positions of the conversations [`search`] would return
pub fn matching_indices(store: &ConversationStore, query: &str) -> Vec<usize> {
    store
        .iter()
        .enumerate()
        .filter(|(_, c)| matches(c, query))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::store_of;

    fn scenario_store() -> ConversationStore {
        store_of(vec![
            vec![("user", "hi"), ("assistant", "hello")],
            vec![("assistant", "ok"), ("assistant", "done")],
        ])
    }

    #[test]
    fn test_search_hello_returns_first_only() {
        let store = scenario_store();
        let results = search(&store, "hello");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0], &store.conversations()[0]);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let store = scenario_store();
        let results = search(&store, "");

        assert_eq!(results.len(), 2);
        assert!(results.iter().zip(store.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_user_turns_are_not_searched() {
        let store = scenario_store();
        assert!(search(&store, "hi").is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let store = scenario_store();
        assert!(search(&store, "Hello").is_empty());
    }

    #[test]
    fn test_match_across_message_boundary() {
        // "ok" + "done" concatenate to "okdone"
        let store = scenario_store();
        assert_eq!(matching_indices(&store, "kdo"), vec![1]);
    }

    #[test]
    fn test_no_assistant_messages_never_match() {
        let store = store_of(vec![vec![("user", "needle"), ("system", "needle")]]);
        assert!(search(&store, "needle").is_empty());
        assert_eq!(search(&store, "").len(), 1);
    }

    #[test]
    fn test_matching_indices_agree_with_search() {
        let store = store_of(vec![
            vec![("assistant", "alpha")],
            vec![("assistant", "beta")],
            vec![("assistant", "alphabet")],
        ]);

        let indices = matching_indices(&store, "alpha");
        assert_eq!(indices, vec![0, 2]);

        let results = search(&store, "alpha");
        for (idx, conversation) in indices.iter().zip(results) {
            assert_eq!(store.get(*idx), Some(conversation));
        }
    }
}
