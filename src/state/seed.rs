//! Built-in dataset the app starts with.
//!
//! This is the only place initial data comes from. A backend would replace
//! these functions; nothing else needs to change.

use crate::models::{
    Achievement, BadgeIcon, Comment, Leaderboard, Mission, Player, PlayerStats, Post,
    RecentActivity, UserProfile,
};

pub fn posts() -> Vec<Post> {
    vec![
        Post::new(
            "p1",
            "Aditi",
            "2h",
            "https://images.unsplash.com/photo-1528747045269-390fe33c19d3?w=1600&q=80&auto=format&fit=crop",
            "Recycled 2.1 kg plastic today! Small steps, big impact ♻️",
            42,
        )
        .with_comments(vec![
            Comment::new("c1", "Rahul", "Amazing! Keep going 🙌"),
            Comment::new("c2", "Sneha", "Inspired to do the same 🌱"),
        ]),
        Post::new(
            "p2",
            "Rahul",
            "4h",
            "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?w=1600&q=80&auto=format&fit=crop",
            "Biked 4.5 km to work. Saved CO₂ and felt great 🚴",
            27,
        )
        .with_comments(vec![Comment::new("c3", "Aditi", "Nice ride!")]),
        Post::new(
            "p3",
            "Sneha",
            "1d",
            "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?w=1600&q=80&auto=format&fit=crop",
            "Planted a sapling today 🌱 join me next weekend!",
            64,
        ),
    ]
}

pub fn player_stats() -> PlayerStats {
    PlayerStats {
        xp: 740,
        next_level_xp: 1000,
        level: 3,
        points: 420,
        streak_days: 7,
        carbon_saved_kg: 4.6,
    }
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("a1", "First 100 XP", "Completed first 100 XP", BadgeIcon::Star),
        Achievement::new("a2", "Streak 7", "7 day activity streak", BadgeIcon::Bolt),
        Achievement::new("a3", "Green Hero", "Saved 5 kg CO₂", BadgeIcon::Leaf),
    ]
}

pub fn recent_activity() -> Vec<RecentActivity> {
    [
        ("r1", "Biked to work, 0.4 kg CO₂ saved", "2h"),
        ("r2", "Recycled plastic, 1.2 kg", "1d"),
        ("r3", "Hosted a carpool, 0.8 kg saved", "3d"),
    ]
    .into_iter()
    .map(|(id, text, time)| RecentActivity {
        id: id.to_string(),
        text: text.to_string(),
        time_label: time.to_string(),
        points: 5,
    })
    .collect()
}

pub fn missions() -> Vec<Mission> {
    vec![
        Mission {
            id: "m1".to_string(),
            title: "Bike to Work".to_string(),
            xp_reward: 8,
            co2_kg: 0.5,
            progress: 0.6,
            icon: BadgeIcon::Bolt,
        },
        Mission {
            id: "m2".to_string(),
            title: "Recycle 2kg".to_string(),
            xp_reward: 12,
            co2_kg: 2.0,
            progress: 0.25,
            icon: BadgeIcon::Star,
        },
        Mission {
            id: "m3".to_string(),
            title: "Plant a Tree".to_string(),
            xp_reward: 30,
            co2_kg: 5.0,
            progress: 0.0,
            icon: BadgeIcon::Trophy,
        },
    ]
}

pub fn leaderboard() -> Leaderboard {
    let rows = [
        ("1", "Sufiyan", 1280, 7, 12),
        ("2", "Saalim", 940, 5, 9),
        ("3", "Yash", 780, 4, 5),
        ("4", "Vihaan", 600, 3, 4),
        ("5", "Ishaan", 430, 3, 2),
    ];
    Leaderboard::new(
        rows.into_iter()
            .map(|(id, name, xp, level, streak)| Player {
                id: id.to_string(),
                name: name.to_string(),
                xp,
                level,
                streak_days: streak,
            })
            .collect(),
    )
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "MohammadSaalim".to_string(),
        handle: "@saalim".to_string(),
        level: 5,
        xp: 940,
        next_level_xp: 1200,
        streak_days: 9,
        co2_saved_kg: 12.4,
        joined: "January 2025".to_string(),
        badges: vec![
            Achievement::new("b1", "Eco Achiever", "100 XP Milestone", BadgeIcon::Star),
            Achievement::new("b2", "Streak Master", "7-Day Streak", BadgeIcon::Bolt),
            Achievement::new("b3", "Green Hero", "Saved 10kg CO₂", BadgeIcon::Leaf),
            Achievement::new("b4", "Top 3", "Leaderboard Rank", BadgeIcon::Medal),
        ],
        recent_activity: vec![
            "Recycled plastic waste (+12 XP)".to_string(),
            "Biked to work (+8 XP)".to_string(),
            "Avoided single-use plastic (+5 XP)".to_string(),
            "Carpooled to university (+7 XP)".to_string(),
        ],
    }
}
