//! DOM Tree (arena-based allocation)
//!
//! Node creation, tree mutation (appendChild, removeChild) and the
//! element-level accessors everything else is built on.

use iuai_css::{StyleDeclaration, StyleSheet};

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    pub(crate) next_listener: u32,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            next_listener: 0,
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element. Tag names are lowercased.
    pub fn create_element(&mut self, tag: &str) -> DomResult<NodeId> {
        if !is_valid_name(tag) {
            return Err(DomError::InvalidCharacter(tag.to_string()));
        }
        Ok(self.push(Node::element(&tag.to_ascii_lowercase())))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    /// Create an empty document fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.push(Node::fragment())
    }

    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.get(id)
            .ok_or(DomError::NotFound)?
            .as_element()
            .ok_or(DomError::InvalidNodeType("element"))
    }

    pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType("element"))
    }

    /// Whether the node is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Whether the node is a document fragment
    pub fn is_fragment(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_fragment)
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|e| e.tag.as_str())
    }

    /// Parent node, `NONE` when detached
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE)
    }

    /// Parent if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id).to_option()?;
        self.is_element(parent).then_some(parent)
    }

    /// First child that is an element
    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).find(|(_, n)| n.is_element()).map(|(id, _)| id)
    }

    /// Previous sibling that is an element
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.get(id)?.prev_sibling;
        while current.is_valid() {
            if self.is_element(current) {
                return Some(current);
            }
            current = self.get(current)?.prev_sibling;
        }
        None
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    pub fn child_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).map(|(id, _)| id).collect()
    }

    /// Descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_nodes(id).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.child_nodes(node).into_iter().rev());
        }
        out
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.parent(current);
        }
        false
    }

    /// Whether the node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.root(), id)
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is already in the tree is moved. Appending a fragment
    /// moves its children instead and leaves the fragment empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound)?;
        if !parent_node.is_container() {
            return Err(DomError::HierarchyRequest("parent cannot have children"));
        }
        let child_node = self.get(child).ok_or(DomError::NotFound)?;
        if matches!(child_node.data, NodeData::Document) {
            return Err(DomError::HierarchyRequest("cannot append a document"));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest("child is an ancestor of parent"));
        }

        if self.is_fragment(child) {
            for grandchild in self.child_nodes(child) {
                self.append_child(parent, grandchild)?;
            }
            return Ok(child);
        }

        self.detach(child);
        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(child)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(child).ok_or(DomError::NotFound)?.parent != parent {
            return Err(DomError::NotFound);
        }
        self.detach(child);
        Ok(child)
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    // ------------------------------------------------------------------
    // Attributes & style
    // ------------------------------------------------------------------

    /// Attribute value; `style` reads the inline declaration block
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let element = self.element(id).ok()?;
        let name = name.to_ascii_lowercase();
        if name == "style" {
            return (!element.style.is_empty()).then(|| element.style.css_text());
        }
        element.attrs.get(&name).map(str::to_string)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Set an attribute; `style` replaces the inline declaration block
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        if !is_valid_name(name) {
            return Err(DomError::InvalidCharacter(name.to_string()));
        }
        let element = self.element_mut(id)?;
        let name = name.to_ascii_lowercase();
        if name == "style" {
            element.style.set_css_text(value);
        } else {
            element.attrs.set(&name, value);
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        let element = self.element_mut(id)?;
        let name = name.to_ascii_lowercase();
        if name == "style" {
            element.style = StyleDeclaration::new();
        } else {
            element.attrs.remove(&name);
        }
        Ok(())
    }

    /// Inline style of an element
    pub fn style(&self, id: NodeId) -> DomResult<&StyleDeclaration> {
        Ok(&self.element(id)?.style)
    }

    pub fn style_mut(&mut self, id: NodeId) -> DomResult<&mut StyleDeclaration> {
        Ok(&mut self.element_mut(id)?.style)
    }

    /// Stylesheet of a `<style>` element; only present while connected
    pub fn sheet(&self, id: NodeId) -> Option<&StyleSheet> {
        if !self.is_connected(id) {
            return None;
        }
        self.element(id).ok()?.sheet.as_ref()
    }

    pub fn sheet_mut(&mut self, id: NodeId) -> Option<&mut StyleSheet> {
        if !self.is_connected(id) {
            return None;
        }
        self.element_mut(id).ok()?.sheet.as_mut()
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }

    /// Replace all children with a single text node (none for "")
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        let node = self.get_mut(id).ok_or(DomError::NotFound)?;
        if let NodeData::Text(content) = &mut node.data {
            *content = text.to_string();
            return Ok(());
        }
        for child in self.child_nodes(id) {
            self.detach(child);
        }
        if !text.is_empty() {
            let text = self.create_text(text);
            self.append_child(id, text)?;
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Element and attribute names: a leading ASCII letter, then anything but
/// whitespace and markup delimiters.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| !c.is_whitespace() && !matches!(c, '/' | '>' | '<' | '=' | '"' | '\'' | '\0'))
}
