use swc_ecma_ast::{JSXAttrName, JSXAttrOrSpread, JSXOpeningElement};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::attribute_set::AttributeNameSet;

pub fn filter_attributes(
    attrs: Vec<JSXAttrOrSpread>,
    attribute_set: &AttributeNameSet,
) -> Vec<JSXAttrOrSpread> {
    attrs
        .into_iter()
        .filter(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(jsx_attr) => !matches_name(&jsx_attr.name, attribute_set),
            JSXAttrOrSpread::SpreadElement(_) => true,
        })
        .collect()
}

fn matches_name(name: &JSXAttrName, attribute_set: &AttributeNameSet) -> bool {
    match name {
        JSXAttrName::Ident(ident) => attribute_set.contains(ident.sym.as_ref()),
        JSXAttrName::JSXNamespacedName(namespaced) => {
            let qualified = format!("{}:{}", namespaced.ns.sym, namespaced.name.sym);

            attribute_set.contains(&qualified)
        }
    }
}

pub fn strip_element_attributes(
    element: &mut JSXOpeningElement,
    attribute_set: &AttributeNameSet,
) {
    element.attrs = filter_attributes(
        std::mem::take(&mut element.attrs),
        attribute_set,
    );
}

pub struct StripAttributes<'a> {
    pub attribute_set: &'a AttributeNameSet,
}

impl VisitMut for StripAttributes<'_> {
    fn visit_mut_jsx_opening_element(&mut self, element: &mut JSXOpeningElement) {
        strip_element_attributes(element, self.attribute_set);

        element.visit_mut_children_with(self);
    }
}
