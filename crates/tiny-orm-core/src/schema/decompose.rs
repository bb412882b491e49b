use super::FieldType;

/// Splits a declared field type into its base type and whether a value is
/// required.
///
/// `Optional` wrappers and `Null` union members make the field optional and
/// are removed. A union that is left with a single member collapses to that
/// member; a union with several members is returned as a union of the
/// non-null members, which [`is_valid`] then rejects.
pub fn decompose(ty: &FieldType) -> (FieldType, bool) {
    match ty {
        FieldType::Optional(inner) => {
            let (base, _) = decompose(inner);
            (base, false)
        }
        FieldType::Union(members) => {
            let mut nullable = false;
            let mut non_null = vec![];
            flatten_union(members, &mut nullable, &mut non_null);

            match non_null.len() {
                0 => (FieldType::Null, true),
                1 => (non_null.remove(0), !nullable),
                _ => (FieldType::Union(non_null), !nullable),
            }
        }
        _ => (ty.clone(), true),
    }
}

/// Returns `true` if a decomposed base type can be stored in a column.
pub fn is_valid(ty: &FieldType) -> bool {
    matches!(
        ty,
        FieldType::Integer
            | FieldType::Text
            | FieldType::Boolean
            | FieldType::Float
            | FieldType::Record(_)
    )
}

fn flatten_union(members: &[FieldType], nullable: &mut bool, dst: &mut Vec<FieldType>) {
    for member in members {
        match member {
            FieldType::Null => *nullable = true,
            FieldType::Optional(inner) => {
                *nullable = true;
                flatten_union(std::slice::from_ref(&**inner), nullable, dst);
            }
            FieldType::Union(nested) => flatten_union(nested, nullable, dst),
            _ => {
                if !dst.contains(member) {
                    dst.push(member.clone());
                }
            }
        }
    }
}
