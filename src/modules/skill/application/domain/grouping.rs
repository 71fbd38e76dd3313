use std::collections::BTreeMap;

use super::entities::{Skill, SkillCategory};

/// Partitions skills into per-category buckets.
///
/// Every skill lands in exactly one bucket, the one keyed by its own
/// category. Within a bucket the input order is preserved. Categories with
/// no skills get no key.
pub fn group_by_category(skills: &[Skill]) -> BTreeMap<SkillCategory, Vec<Skill>> {
    let mut grouped: BTreeMap<SkillCategory, Vec<Skill>> = BTreeMap::new();

    for skill in skills {
        grouped.entry(skill.category).or_default().push(skill.clone());
    }

    grouped
}

/// Listing order: `display_order` ascending, then name.
pub fn sort_for_display(skills: &mut [Skill]) {
    skills.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::domain::entities::SkillLevel;
    use chrono::Utc;
    use uuid::Uuid;

    fn skill(name: &str, category: SkillCategory, order: i32) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            level: SkillLevel::new(80).unwrap(),
            icon: String::new(),
            display_order: order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn every_skill_lands_in_its_own_bucket_exactly_once() {
        let skills = vec![
            skill("React", SkillCategory::Frontend, 1),
            skill("Node.js", SkillCategory::Backend, 1),
            skill("MongoDB", SkillCategory::Database, 1),
            skill("Next.js", SkillCategory::Frontend, 2),
            skill("Git", SkillCategory::Tools, 1),
            skill("Teamwork", SkillCategory::SoftSkills, 1),
            skill("Express", SkillCategory::Backend, 2),
        ];

        let grouped = group_by_category(&skills);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, skills.len());

        for (category, bucket) in &grouped {
            assert!(bucket.iter().all(|s| s.category == *category));
        }

        for s in &skills {
            let hits = grouped
                .values()
                .flatten()
                .filter(|g| g.id == s.id)
                .count();
            assert_eq!(hits, 1, "{} should appear exactly once", s.name);
        }
    }

    #[test]
    fn bucket_preserves_input_order() {
        let skills = vec![
            skill("B", SkillCategory::Backend, 1),
            skill("A", SkillCategory::Backend, 2),
        ];

        let grouped = group_by_category(&skills);

        assert_eq!(names(&grouped[&SkillCategory::Backend]), vec!["B", "A"]);
    }

    #[test]
    fn absent_categories_have_no_key() {
        let grouped = group_by_category(&[skill("Git", SkillCategory::Tools, 0)]);

        assert_eq!(grouped.len(), 1);
        assert!(!grouped.contains_key(&SkillCategory::Frontend));
    }

    #[test]
    fn grouped_map_serializes_with_wire_category_keys() {
        let grouped = group_by_category(&[
            skill("Leadership", SkillCategory::SoftSkills, 0),
            skill("React", SkillCategory::Frontend, 0),
        ]);

        let json = serde_json::to_value(&grouped).unwrap();

        assert_eq!(json["soft-skills"][0]["name"], "Leadership");
        assert_eq!(json["frontend"][0]["name"], "React");
    }

    #[test]
    fn sort_uses_order_then_name() {
        let mut skills = vec![
            skill("Zod", SkillCategory::Frontend, 1),
            skill("Git", SkillCategory::Tools, 2),
            skill("Angular", SkillCategory::Frontend, 1),
            skill("Bash", SkillCategory::Tools, 0),
        ];

        sort_for_display(&mut skills);

        assert_eq!(names(&skills), vec!["Bash", "Angular", "Zod", "Git"]);
    }
}
