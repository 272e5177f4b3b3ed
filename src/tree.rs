//! Server and conversation listing.
//!
//! The channel switcher shows servers with their conversations underneath.
//! Nodes are a tagged variant, and callers walk the tree through
//! [`TreeVisitor`] or [`NetworkTree::iter`] rather than inspecting node types
//! ad hoc.

use crate::store::{ConversationId, ConversationKind};

/// A conversation entry in the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversationNode {
    /// Conversation identity.
    pub id: ConversationId,
    /// Kind of conversation.
    pub kind: ConversationKind,
    /// Display name.
    pub name: String,
}

/// A server entry and the conversations under it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerNode {
    /// Network or server name.
    pub name: String,
    /// Conversations in display order.
    pub children: Vec<ConversationNode>,
}

/// Any node of the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    /// A server.
    Server(&'a ServerNode),
    /// A conversation.
    Conversation(&'a ConversationNode),
}

impl<'a> Node<'a> {
    /// Display name of the node.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Node::Server(server) => &server.name,
            Node::Conversation(conversation) => &conversation.name,
        }
    }
}

/// Depth-first visitor over a [`NetworkTree`].
pub trait TreeVisitor {
    /// Called for each server before its conversations.
    fn visit_server(&mut self, _server: &ServerNode) {}

    /// Called for each conversation.
    fn visit_conversation(&mut self, _server: &ServerNode, _conversation: &ConversationNode) {}
}

/// Ordered servers with their conversations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkTree {
    servers: Vec<ServerNode>,
}

impl NetworkTree {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a server if none with that name exists.
    pub fn add_server(&mut self, name: &str) {
        if !self.servers.iter().any(|s| s.name == name) {
            self.servers.push(ServerNode {
                name: name.to_string(),
                children: Vec::new(),
            });
        }
    }

    /// Append a conversation under `server`, creating the server if needed.
    /// A conversation already in the tree is moved.
    pub fn add_conversation(&mut self, server: &str, node: ConversationNode) {
        self.remove_conversation(node.id);
        self.add_server(server);
        if let Some(entry) = self.servers.iter_mut().find(|s| s.name == server) {
            entry.children.push(node);
        }
    }

    /// Remove a conversation wherever it is.
    pub fn remove_conversation(&mut self, id: ConversationId) -> Option<ConversationNode> {
        self.servers.iter_mut().find_map(|server| {
            let pos = server.children.iter().position(|c| c.id == id)?;
            Some(server.children.remove(pos))
        })
    }

    /// Remove a server with everything under it.
    pub fn remove_server(&mut self, name: &str) -> Option<ServerNode> {
        let pos = self.servers.iter().position(|s| s.name == name)?;
        Some(self.servers.remove(pos))
    }

    /// Find a conversation and the server it sits under.
    #[must_use]
    pub fn find(&self, id: ConversationId) -> Option<(&ServerNode, &ConversationNode)> {
        self.servers.iter().find_map(|server| {
            server
                .children
                .iter()
                .find(|c| c.id == id)
                .map(|c| (server, c))
        })
    }

    /// Servers in display order.
    #[must_use]
    pub fn servers(&self) -> &[ServerNode] {
        &self.servers
    }

    /// Walk every node depth-first, servers before their conversations.
    pub fn walk<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) {
        for server in &self.servers {
            visitor.visit_server(server);
            for conversation in &server.children {
                visitor.visit_conversation(server, conversation);
            }
        }
    }

    /// Every node with its depth, in the same order as [`NetworkTree::walk`].
    pub fn iter(&self) -> impl Iterator<Item = (usize, Node<'_>)> {
        self.servers.iter().flat_map(|server| {
            std::iter::once((0, Node::Server(server))).chain(
                server
                    .children
                    .iter()
                    .map(|c| (1, Node::Conversation(c))),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64, name: &str) -> ConversationNode {
        ConversationNode {
            id: ConversationId(id),
            kind: ConversationKind::Channel,
            name: name.to_string(),
        }
    }

    fn tree() -> NetworkTree {
        let mut tree = NetworkTree::new();
        tree.add_conversation("libera", node(1, "#rust"));
        tree.add_conversation("libera", node(2, "#irc"));
        tree.add_conversation("oftc", node(3, "#debian"));
        tree
    }

    #[test]
    fn test_iter_order() {
        let tree = tree();
        let names: Vec<_> = tree.iter().map(|(d, n)| (d, n.name())).collect();
        assert_eq!(
            names,
            vec![
                (0, "libera"),
                (1, "#rust"),
                (1, "#irc"),
                (0, "oftc"),
                (1, "#debian"),
            ]
        );
    }

    #[test]
    fn test_walk_matches_iter() {
        #[derive(Default)]
        struct Collect(Vec<String>);

        impl TreeVisitor for Collect {
            fn visit_server(&mut self, server: &ServerNode) {
                self.0.push(server.name.clone());
            }

            fn visit_conversation(&mut self, server: &ServerNode, c: &ConversationNode) {
                self.0.push(format!("{}/{}", server.name, c.name));
            }
        }

        let mut visitor = Collect::default();
        tree().walk(&mut visitor);
        assert_eq!(
            visitor.0,
            vec!["libera", "libera/#rust", "libera/#irc", "oftc", "oftc/#debian"]
        );
    }

    #[test]
    fn test_find_and_remove() {
        let mut tree = tree();
        let (server, conversation) = tree.find(ConversationId(3)).unwrap();
        assert_eq!(server.name, "oftc");
        assert_eq!(conversation.name, "#debian");

        assert!(tree.remove_conversation(ConversationId(3)).is_some());
        assert!(tree.find(ConversationId(3)).is_none());
        assert!(tree.remove_conversation(ConversationId(3)).is_none());
        assert_eq!(tree.servers()[1].children.len(), 0);
    }

    #[test]
    fn test_add_existing_moves() {
        let mut tree = tree();
        tree.add_conversation("oftc", node(1, "#rust"));
        assert_eq!(tree.servers()[0].children.len(), 1);
        assert_eq!(tree.find(ConversationId(1)).unwrap().0.name, "oftc");
    }

    #[test]
    fn test_remove_server() {
        let mut tree = tree();
        let removed = tree.remove_server("libera").unwrap();
        assert_eq!(removed.children.len(), 2);
        assert_eq!(tree.servers().len(), 1);
    }
}
