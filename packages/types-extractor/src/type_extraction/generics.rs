// Generic Substitution
//
// Builds the per-declaration map from a base type's generic parameters to
// the types supplied at each extension point, and resolves type-parameter
// references through it. Maps compose through the chain, so a parameter
// forwarded across several generic bases still resolves to the outermost
// concrete type.

use crate::types::GenericTypeMapping;
use ts::{ClassId, InterfaceId, Project, TypeId};

/// Resolves a type through the substitution map when its defining or alias
/// symbol is bound there, otherwise returns it unchanged.
pub fn try_to_replace_type_by_generic(
    project: &Project,
    ty: TypeId,
    generic_map: &GenericTypeMapping,
) -> TypeId {
    let resolved = project.type_of(ty);
    resolved
        .symbol
        .or(resolved.alias_symbol)
        .and_then(|symbol| generic_map.get(&symbol).copied())
        .unwrap_or(ty)
}

/// Binds each base type parameter to the corresponding supplied argument.
/// Arguments are first resolved through the mappings already collected from
/// nearer links, so chained generics compose. Count mismatches bind nothing.
pub fn add_generic_type_mappings(
    project: &Project,
    generic_map: &mut GenericTypeMapping,
    type_parameters: &[TypeId],
    type_arguments: &[TypeId],
) {
    if type_parameters.len() != type_arguments.len() {
        return;
    }
    for (parameter, argument) in type_parameters.iter().zip(type_arguments) {
        let Some(symbol) = project.type_of(*parameter).symbol else {
            continue;
        };
        let resolved = try_to_replace_type_by_generic(project, *argument, generic_map);
        generic_map.insert(symbol, resolved);
    }
}

/// Substitution map for a class's full ancestor chain, built nearest link
/// first.
pub fn build_class_generic_map(project: &Project, class: ClassId) -> GenericTypeMapping {
    let mut generic_map = GenericTypeMapping::new();
    let mut current = class;
    while let Some(heritage) = project.class(current).extends.clone() {
        let base = project.class(heritage.base);
        add_generic_type_mappings(
            project,
            &mut generic_map,
            &base.type_parameters,
            &heritage.type_arguments,
        );
        current = heritage.base;
    }
    generic_map
}

/// Substitution map for an interface's heritage graph, breadth-first so
/// nearer clauses bind before farther ones.
pub fn build_interface_generic_map(project: &Project, interface: InterfaceId) -> GenericTypeMapping {
    let mut generic_map = GenericTypeMapping::new();
    let mut visited = vec![interface];
    let mut queue = vec![interface];
    while !queue.is_empty() {
        let current = queue.remove(0);
        for heritage in &project.interface(current).extends {
            let base = project.interface(heritage.base);
            add_generic_type_mappings(
                project,
                &mut generic_map,
                &base.type_parameters,
                &heritage.type_arguments,
            );
            if !visited.contains(&heritage.base) {
                visited.push(heritage.base);
                queue.push(heritage.base);
            }
        }
    }
    generic_map
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts::{ClassDeclaration, HeritageClause, InterfaceDeclaration, InterfaceHeritageClause};

    #[test]
    fn chained_generics_compose_to_the_concrete_type() {
        let mut project = Project::new();
        let t = project.type_parameter("T");
        let u = project.type_parameter("U");
        let concrete = project.string_type();

        // A<T>; B<U> extends A<U>; C extends B<string>
        let a = project.add_class("a.ts", ClassDeclaration::new("A").with_type_parameters(vec![t]));
        let b = project.add_class(
            "b.ts",
            ClassDeclaration::new("B")
                .with_type_parameters(vec![u])
                .with_extends(HeritageClause::new(a).with_type_arguments(vec![u])),
        );
        let c = project.add_class(
            "c.ts",
            ClassDeclaration::new("C")
                .with_extends(HeritageClause::new(b).with_type_arguments(vec![concrete])),
        );

        let generic_map = build_class_generic_map(&project, c);
        assert_eq!(try_to_replace_type_by_generic(&project, t, &generic_map), concrete);
        assert_eq!(try_to_replace_type_by_generic(&project, u, &generic_map), concrete);
    }

    #[test]
    fn heritage_clauses_bind_in_declaration_order() {
        let mut project = Project::new();
        let t = project.type_parameter("T");
        let string = project.string_type();
        let number = project.number_type();

        // Base<T>; Left extends Base<string>; Right extends Base<number>;
        // Combined extends Left, Right
        let base = project.add_interface(
            "base.ts",
            InterfaceDeclaration::new("Base").with_type_parameters(vec![t]),
        );
        let left = project.add_interface(
            "left.ts",
            InterfaceDeclaration::new("Left")
                .with_extends(InterfaceHeritageClause::new(base).with_type_arguments(vec![string])),
        );
        let right = project.add_interface(
            "right.ts",
            InterfaceDeclaration::new("Right")
                .with_extends(InterfaceHeritageClause::new(base).with_type_arguments(vec![number])),
        );
        let combined = project.add_interface(
            "combined.ts",
            InterfaceDeclaration::new("Combined")
                .with_extends(InterfaceHeritageClause::new(left))
                .with_extends(InterfaceHeritageClause::new(right)),
        );

        // the clauses rebind the same parameter; the later declaration's
        // binding is the one left in effect
        let generic_map = build_interface_generic_map(&project, combined);
        assert_eq!(try_to_replace_type_by_generic(&project, t, &generic_map), number);
    }

    #[test]
    fn count_mismatch_binds_nothing() {
        let mut project = Project::new();
        let t = project.type_parameter("T");
        let mut generic_map = GenericTypeMapping::new();
        add_generic_type_mappings(&project, &mut generic_map, &[t], &[]);
        assert!(generic_map.is_empty());
    }
}
