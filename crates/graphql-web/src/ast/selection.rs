use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Kind;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// One entry of a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Selection {
    Field(Arc<Field>),
    FragmentSpread(Arc<FragmentSpread>),
    InlineFragment(Arc<InlineFragment>),
}

#[inherent]
impl AstNode for Selection {
    pub fn kind(&self) -> Kind {
        match self {
            Selection::Field(_) => Kind::Field,
            Selection::FragmentSpread(_) => Kind::FragmentSpread,
            Selection::InlineFragment(_) => Kind::InlineFragment,
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Selection::Field(field) => field.loc.as_ref(),
            Selection::FragmentSpread(spread) => spread.loc.as_ref(),
            Selection::InlineFragment(frag) => frag.loc.as_ref(),
        }
    }

    pub fn print(&self) -> String {
        match self {
            Selection::Field(field) => field.print(),
            Selection::FragmentSpread(spread) => spread.print(),
            Selection::InlineFragment(frag) => frag.print(),
        }
    }
}
