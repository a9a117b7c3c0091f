use classifieds_core::{entities::*, version::current_version};

pub fn user(user: &User) {
    let role = user.role.as_ref().map_or("-", |r| r.name.as_str());
    let state = if user.is_active { "active" } else { "inactive" };
    println!(
        "{}\t{}\t<{}>\t{role}\t{state}",
        user.id,
        user.full_name(),
        user.email
    );
}

pub fn users(users: &[User]) {
    users.iter().for_each(user);
}

/// One line per ad with its current version.
pub fn ads(ads: &[Ad]) {
    for ad in ads {
        match current_version(ad) {
            Ok(v) => println!(
                "{}\t{}\t{}\t{}\t{}",
                ad.id,
                v.status,
                v.version_number,
                v.title,
                ad.category_path()
            ),
            Err(err) => println!("{}\t<{err}>", ad.id),
        }
    }
}

pub fn ad(ad: &Ad) {
    println!("Ad {}", ad.id);
    println!("  Owner:    {} <{}>", ad.user.full_name(), ad.user.email);
    println!("  Category: {}", ad.category_path());
    println!("  City:     {}", ad.city);
    println!("  Active:   {}", ad.is_active);
    println!("  Created:  {}", ad.created_at.format_date());
    if let Some(updated_at) = ad.updated_at {
        println!("  Updated:  {}", updated_at.format_date());
    }
    let current = current_version(ad).ok().map(|v| v.id);
    let mut versions: Vec<_> = ad.versions.iter().collect();
    versions.sort_by_key(|v| std::cmp::Reverse(v.version_number));
    for v in versions {
        let marker = if Some(v.id) == current { "*" } else { " " };
        println!();
        version(marker, v);
    }
}

pub fn version(marker: &str, v: &AdVersion) {
    println!(
        "{marker} {} (id {}) [{}] {}",
        v.version_number, v.id, v.status, v.created_at
    );
    println!("    {} ({:.2})", v.title, v.price);
    if !v.description.is_empty() {
        println!("    {}", v.description);
    }
    if let Some(moderator) = &v.moderator {
        println!("    Moderated by {}", moderator.full_name());
    }
    if let Some(reason) = &v.rejection_reason {
        println!("    Rejected: {reason}");
    }
}

pub fn categories(categories: &[Category]) {
    for c in categories {
        println!("{}\t{}\t{}", c.id, c.name, c.description);
        for s in &c.subcategories {
            println!("  {}\t{}\t{}", s.id, s.name, s.description);
        }
    }
}

pub fn subcategories(subcategories: &[Subcategory]) {
    for s in subcategories {
        let category = s.category.as_ref().map_or("-", |c| c.name.as_str());
        println!("{}\t{}\t{category}\t{}", s.id, s.name, s.description);
    }
}
