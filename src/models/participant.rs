use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub quiz_game_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl Participant {
    pub fn new(quiz_game_id: Option<i64>, user_id: Option<i64>) -> Self {
        return Self {
            quiz_game_id,
            user_id,
        };
    }

    pub fn builder() -> ParticipantBuilder {
        return ParticipantBuilder::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticipantBuilder {
    quiz_game_id: Option<i64>,
    user_id: Option<i64>,
}

impl ParticipantBuilder {
    pub fn quiz_game_id(mut self, quiz_game_id: i64) -> Self {
        self.quiz_game_id = Some(quiz_game_id);
        return self;
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        return self;
    }

    pub fn build(&self) -> Participant {
        return Participant {
            quiz_game_id: self.quiz_game_id,
            user_id: self.user_id,
        };
    }
}
