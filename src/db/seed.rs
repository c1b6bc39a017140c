// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities loaded into the directory at startup.

use crate::models::{Activities, Activity};

/// Build the fixed set of activities every fresh process starts with.
pub fn seed_activities() -> Activities {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Train together and play friendly soccer matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and sculpture with fellow artists",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce school plays and performances",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(&["liam@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(&["noah@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
