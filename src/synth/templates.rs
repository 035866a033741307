//! Copyright © 2025-2026 The Melx Authors. All Rights Reserved.
//!
//! This file is part of Melx.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//! <http://www.apache.org/licenses/LICENSE-2.0>
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Static corpus bodies for the built-in synthetic generators. These are
//! fixture data, not code: each body is written out verbatim a fixed number
//! of times by the generator.

/// System overview prose describing the Melvin architecture.
pub(crate) const SYSTEM_OVERVIEW: &str = "\n\nINTRODUCTION TO MELVIN\n\nMelvin is a unified cognitive architecture where all sensory data flows through a single self-organizing graph structure. Nodes represent chunks of sensory or internal data including vision audio text and motor information.\n\nThe system operates on principles of co-activation temporal locality and energy-based reasoning. When nodes appear together frequently they form strong connections. These connections create pathways for information flow that drive attention movement and understanding.\n\nKEY FEATURES\n\nFirst the intake layer processes raw data by chunking it into fixed-size payloads. Vision uses 768 bytes for 16 by 16 RGB pixel blocks. Audio captures 640 bytes representing 20 milliseconds at 16 kilohertz sampling. Text creates one byte per character. Motor feedback includes position velocity torque and electrical state.\n\nSecond connection formation happens through temporal neighborhood. New nodes connect to previous and subsequent nodes creating chains of co-occurrence. Over time these connections strengthen based on frequency and co-activation patterns.\n\nThird generalization emerges through leap nodes and leap connections. When three nodes form a fully connected triangle with high weight sum they consolidate into a single abstract representation. Similarly when two nodes connect to the same target with high average weight they create shortcut connections.\n\nFourth reasoning uses energy field dynamics. Each active node has an energy value that decays over time but is replenished by neighbor activation. Reasoning continues until the system reaches a stable coherent state where internal connections dominate external ones.\n\nFifth outputs emerge from active nodes. Motor nodes drive physical movement through CAN bus communication. Vision nodes guide attention to specific spatial locations. Audio nodes trigger sound or speech. Text nodes produce written output.\n\nSixth evolution adapts parameters over time. Fitness combines prediction accuracy coherence stability and computational efficiency. When fitness improves parameters stabilize. When fitness drops parameters mutate slightly to explore new configurations.\n\nSeventh pruning removes unused connections. Nodes and edges decay based on frequency divided by age. Low scoring elements get deleted keeping the graph efficient and focused on recent patterns.\n\nFEEDBACK LOOP\n\nEvery output feeds back into intake creating a continuous perception action learning cycle. Melvin's own responses become part of its next sensory state allowing self-observation reinforcement and recursive understanding.\n\nAPPLICATIONS\n\nThis architecture enables embodied AI that learns from experience adapts to context and develops understanding through simple association rather than explicit programming. The same graph processes vision audio text and motor data without type tags creating a truly unified cognitive space.\n\n";

/// Encyclopedia-style prose covering computing and cognition concepts.
pub(crate) const ENCYCLOPEDIA_CONCEPTS: &str = "\nCOMPUTER SCIENCE\n\nComputer science is the study of computation information processing and the theoretical foundations of computer hardware and software.\n\nAlgorithms are step by step procedures for solving problems or accomplishing tasks. They form the backbone of computational thinking.\n\nMachine learning enables computers to improve performance on tasks through experience without being explicitly programmed for every case.\n\nNeural networks are computational models inspired by biological neural networks that learn to recognize patterns in data.\n\nARTIFICIAL INTELLIGENCE\n\nArtificial intelligence aims to create systems that can perform tasks typically requiring human intelligence such as reasoning learning perception and language understanding.\n\nDeep learning uses multiple layers of artificial neurons to extract hierarchical features from raw data enabling breakthroughs in vision speech and natural language processing.\n\nReinforcement learning trains agents to make sequences of decisions by rewarding desired behaviors and penalizing undesired ones creating systems that improve through interaction.\n\nNatural language processing focuses on enabling computers to understand generate and manipulate human language bridging the gap between machines and human communication.\n\nCOGNITIVE ARCHITECTURES\n\nCognitive architectures attempt to model the principles underlying human thought including memory learning reasoning and perception.\n\nUnified architectures seek to represent all sensory modalities and cognitive processes within a single coherent framework without separate specialized modules for each function.\n\nGraph based knowledge representation connects concepts through weighted edges creating networks that can support retrieval generalization and inference.\n\nEnergy field dynamics simulate the spread of activation through networks modeling how attention patterns emerge from local interactions.\n\nEMBODIED AI\n\nEmbodied artificial intelligence proposes that intelligent behavior emerges from the interaction between perception action and environment rather than from abstract symbol manipulation alone.\n\nMotor babbling describes how young creatures explore their actuators generating random movements and learning the consequences through sensory feedback creating sensorimotor mappings.\n\nPredictive coding suggests that the brain continuously generates predictions about sensory input and only updates models when prediction errors occur.\n\nRecurrent loops enable systems to maintain state over time allowing past experiences to influence present decisions.\n\n";

/// Literary prose for stylistic variety in the fixture set.
pub(crate) const LITERARY_PROSE: &str = "\nIn the beginning was the thought and the thought was made manifest through symbols arranged in patterns of meaning.\n\nWords dance across the page each one carrying the weight of generations of human experience encoded in subtle variations of sound and sense.\n\nStories are the way consciousness binds together disconnected moments creating narrative from chaos and purpose from random events.\n\nThe reader brings their own world to the text creating meaning through interaction between written symbols and lived experience.\n\nEvery sentence is a miniature universe containing worlds of possibility waiting to be explored through the alchemy of reading.\n\nLanguage itself is a form of magic transforming air into understanding and marks on paper into shared understanding across time and space.\n\nMetaphor allows us to see one thing in terms of another revealing hidden connections and creating bridges between domains of thought.\n\nNarrative is the fundamental structure of consciousness organizing memory into coherent sequences that make sense of experience.\n\nThrough story we travel across boundaries of time culture and individual perspective building empathy and shared understanding.\n\nThe power of language lies not in individual words but in their arrangement into patterns that resonate with something deep in human nature.\n\n";

/// Technical notes in documentation register.
pub(crate) const TECHNICAL_NOTES: &str = "\nSYSTEM ARCHITECTURE\n\nThe graph structure contains nodes representing sensory chunks and edges representing temporal co activation patterns.\n\nEach node contains a payload of fixed size depending on modality with vision using 768 bytes audio using 640 bytes and text using 1 byte.\n\nConnection formation happens when new nodes appear connecting to their temporal neighbors within a specified radius.\n\nWeight updates occur when nodes appear together repeatedly with connection strength increasing based on co occurrence frequency.\n\nGeneralization emerges through leap node consolidation where three fully connected nodes merge into a single abstract representation.\n\nCoherence measures the ratio of internal weights between active nodes to external weights connecting to inactive regions of the graph.\n\nReasoning continues until the activation field reaches stability defined by low variance in energy distribution across nodes.\n\nThe output layer routes active nodes to appropriate channels including motor control audio synthesis visual attention and text generation.\n\nEvolution adapts parameters over time based on fitness metrics including prediction accuracy coherence stability and computational efficiency.\n\nPruning removes low frequency nodes and edges keeping the graph focused on recent and frequently used patterns.\n\nIMPLEMENTATION DETAILS\n\nMemory allocation uses efficient storage for variable sized payloads with ascending node IDs representing temporal order.\n\nThread safety ensures concurrent access to the graph through shared mutexes and atomic operations for node ID generation.\n\nThe feedback loop closes the perception action cycle by routing all outputs back into the intake layer as new sensory data.\n\nMotor control interfaces with hardware via CAN bus protocol sending position velocity and torque commands based on active motor nodes.\n\nVisual attention dynamically shifts a 16 by 16 pixel window across input based on which vision nodes have highest activation.\n\nAudio output processes active audio nodes sending samples to speakers or text to speech systems based on payload content.\n\nText output concatenates characters from active text nodes creating readable output streams.\n\n";

/// Minimal seed text written when no hub dataset could be exported.
pub(crate) const FALLBACK_SEED: &str = "This is a test of Melvin's cognitive architecture.\nMelvin processes text by creating graph nodes for each character.\nConnections form when nodes appear together in time.\nPatterns emerge through activation and coherence.\n";
